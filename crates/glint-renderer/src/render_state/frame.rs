use crate::bloom::ScenePass;
use crate::gpu::RendererError;
use crate::viewer::ViewedTexture;

use super::helpers::{acquire_frame, log_first_frame};
use super::state::RenderState;

impl RenderState {
    /// Run the bloom pipeline onto the surface and present it.
    pub fn render_bloom_frame<F>(&mut self, draw_scene: F) -> Result<(), RendererError>
    where
        F: FnOnce(&mut ScenePass<'_>),
    {
        let output = acquire_frame(&self.gpu)?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.bloom
            .run(&self.gpu.device, &self.gpu.queue, &view, draw_scene);
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());
        Ok(())
    }

    /// Draw one texture through the debug viewer and present it.
    pub fn render_texture(&mut self, viewed: &mut ViewedTexture) -> Result<(), RendererError> {
        let output = acquire_frame(&self.gpu)?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("glint viewer encoder"),
            });
        self.viewer.render(
            &self.gpu.queue,
            &mut encoder,
            &view,
            viewed,
            self.gpu.size.width,
            self.gpu.size.height,
        );
        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());
        Ok(())
    }
}
