//! Bloom post-processing pipeline.
//!
//! The caller draws a scene into an offscreen target, which is blurred
//! horizontally then vertically with a triangular kernel, tone-mapped and
//! whitened, and finally added onto a desaturated copy of the scene in the
//! output view. All passes sample through one mirrored-repeat linear sampler.

pub mod kernel;
mod pipeline;
mod program;
mod quad;
mod scene;
mod shaders;
mod targets;
mod types;

pub use pipeline::*;
pub use program::{layout_entries, ProgramDesc, ShaderProgram};
pub use quad::{quad_vertices, FullscreenQuad, QUAD_VERTEX_COUNT};
pub use scene::{ScenePass, SceneTexture};
pub use shaders::{check_wgsl, ShaderSet};
pub use targets::{validate_size, BloomTargets, RenderTarget};
pub use types::*;
