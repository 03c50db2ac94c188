use std::sync::Arc;
use winit::window::Window;

use glint_config::GlintConfig;

use crate::bloom::{BloomPipeline, BloomSettings};
use crate::gpu::{GpuContext, RendererError};
use crate::viewer::TextureViewer;

/// GPU context plus everything that draws into its surface.
pub struct RenderState {
    pub gpu: GpuContext,
    pub bloom: BloomPipeline,
    pub viewer: TextureViewer,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, config: &GlintConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;

        let bloom = BloomPipeline::new(
            &gpu.device,
            gpu.format(),
            gpu.size.width,
            gpu.size.height,
            BloomSettings::from_config(&config.bloom),
        )?;

        let viewer = TextureViewer::new(&gpu.device, gpu.format())?;

        Ok(Self { gpu, bloom, viewer })
    }

    /// Handle a window resize: reconfigure the surface and the bloom targets.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RendererError> {
        self.gpu.resize(width, height);
        self.bloom
            .resize(&self.gpu.device, self.gpu.size.width, self.gpu.size.height)
    }
}
