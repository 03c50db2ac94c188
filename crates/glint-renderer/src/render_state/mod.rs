//! Window-level rendering: the surface, the bloom pipeline and the viewer.

mod frame;
mod helpers;
mod state;

pub use state::RenderState;
