pub mod bloom;
pub mod gpu;
pub mod render_state;
pub mod textures;
pub mod viewer;

pub use bloom::{BloomPipeline, BloomSettings, ScenePass, SceneTexture, ShaderSet};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use render_state::RenderState;
pub use textures::GeneratedTexture;
pub use viewer::{TextureViewer, ViewedTexture};
