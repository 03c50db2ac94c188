//! Debug texture viewer.
//!
//! Clears the target to blue and draws a texture alpha-blended on a centered
//! square whose side is the larger target dimension, so transparent regions
//! of the texture show the blue backdrop.

use crate::bloom::{ProgramDesc, ShaderProgram};
use crate::gpu::{PhysicalSize, RendererError};
use crate::textures::GeneratedTexture;

const VIEWER_WGSL: &str = include_str!("../shaders/viewer.wgsl");

/// Backdrop color behind the viewed texture.
pub const VIEWER_CLEAR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
struct ViewerUniforms {
    half_extent: [f32; 2],
    _pad: [f32; 2],
}

pub struct TextureViewer {
    program: ShaderProgram,
}

impl TextureViewer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Result<Self, RendererError> {
        let program = ShaderProgram::build(
            device,
            &ProgramDesc {
                label: "texture viewer",
                source: VIEWER_WGSL,
                uniform: Some((
                    wgpu::ShaderStages::VERTEX,
                    std::mem::size_of::<ViewerUniforms>() as u64,
                )),
                texture_count: 1,
                target_format: format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_stencil: None,
                vertex_buffers: &[],
            },
        )?;
        Ok(Self { program })
    }

    /// Bind `texture` for viewing. The bind group lives as long as the result.
    pub fn bind(&self, device: &wgpu::Device, texture: GeneratedTexture) -> ViewedTexture {
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("texture viewer uniforms"),
            size: std::mem::size_of::<ViewerUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = self.program.bind_group(
            device,
            "texture viewer bind group",
            Some(&uniform_buffer),
            &[&texture.view],
            &texture.sampler,
        );
        ViewedTexture {
            texture,
            uniform_buffer,
            bind_group,
            target_size: None,
        }
    }

    /// Record one viewer pass onto a `target_width x target_height` target.
    pub fn render(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        viewed: &mut ViewedTexture,
        target_width: u32,
        target_height: u32,
    ) {
        viewed.set_target_size(queue, PhysicalSize::new(target_width, target_height));

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("texture viewer pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(VIEWER_CLEAR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_pipeline(&self.program.pipeline);
        pass.set_bind_group(0, &viewed.bind_group, &[]);
        pass.draw(0..6, 0..1);
    }
}

/// A generated texture bound to the viewer program.
pub struct ViewedTexture {
    texture: GeneratedTexture,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    target_size: Option<PhysicalSize>,
}

impl ViewedTexture {
    pub fn texture(&self) -> &GeneratedTexture {
        &self.texture
    }

    /// Rewrite the placement uniform. Returns `false` when `size` is unchanged.
    pub fn set_target_size(&mut self, queue: &wgpu::Queue, size: PhysicalSize) -> bool {
        if self.target_size == Some(size) {
            return false;
        }
        let uniforms = ViewerUniforms {
            half_extent: half_extent(size.width, size.height),
            _pad: [0.0; 2],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.target_size = Some(size);
        true
    }
}

/// Clip-space half extents of a centered square of side `max(w, h)` pixels.
pub fn half_extent(target_width: u32, target_height: u32) -> [f32; 2] {
    let w = target_width.max(1) as f32;
    let h = target_height.max(1) as f32;
    let side = w.max(h);
    [side / w, side / h]
}
