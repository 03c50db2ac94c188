//! Procedurally generated textures: a soft radial disc and solid fills.
//!
//! Pixel data is produced on the CPU ([`generate`]) and uploaded with a
//! clamp-to-edge, linear sampler ([`upload`]). Upload failures are logged
//! and reported as `None` so callers can continue without the texture.

pub mod generate;
mod upload;

pub use generate::{radial_gradient_pixels, radial_gradient_pixels_with_stop, solid_pixels};
pub use upload::*;
