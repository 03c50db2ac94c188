//! Scene capture: the render pass handed to the caller's draw callback.

use wgpu::util::DeviceExt;

use super::program::ShaderProgram;
use super::quad::FullscreenQuad;
use super::types::SceneUniforms;

/// The open render pass on the scene target.
///
/// Callers draw through [`Self::draw_texture`] or record their own commands
/// on [`Self::render_pass`]. Custom pipelines must target
/// [`super::TARGET_FORMAT`] with a [`super::DEPTH_FORMAT`] depth attachment.
/// Opening another pass on the encoder is not possible while this is alive.
pub struct ScenePass<'a> {
    pass: wgpu::RenderPass<'a>,
    program: &'a ShaderProgram,
    quad: &'a FullscreenQuad,
}

impl<'a> ScenePass<'a> {
    pub(crate) fn new(
        pass: wgpu::RenderPass<'a>,
        program: &'a ShaderProgram,
        quad: &'a FullscreenQuad,
    ) -> Self {
        Self {
            pass,
            program,
            quad,
        }
    }

    pub fn render_pass(&mut self) -> &mut wgpu::RenderPass<'a> {
        &mut self.pass
    }

    /// Draw a texture alpha-blended at the rectangle stored in `texture`.
    pub fn draw_texture(&mut self, texture: &SceneTexture) {
        self.pass.set_pipeline(&self.program.pipeline);
        self.pass.set_bind_group(0, &texture.bind_group, &[]);
        self.quad.draw(&mut self.pass);
    }
}

/// A texture bound for drawing in the scene pass, with its own placement.
pub struct SceneTexture {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    rect: SceneUniforms,
}

impl SceneTexture {
    pub(crate) fn new(
        device: &wgpu::Device,
        program: &ShaderProgram,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
        rect: SceneUniforms,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("scene texture uniforms"),
            contents: bytemuck::bytes_of(&rect),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = program.bind_group(
            device,
            "scene texture bind group",
            Some(&uniform_buffer),
            &[view],
            sampler,
        );
        Self {
            uniform_buffer,
            bind_group,
            rect,
        }
    }

    /// Move the texture. Takes effect on the next submitted frame.
    pub fn set_rect(&mut self, queue: &wgpu::Queue, rect: SceneUniforms) {
        if rect == self.rect {
            return;
        }
        self.rect = rect;
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&rect));
    }

    pub fn rect(&self) -> SceneUniforms {
        self.rect
    }
}
