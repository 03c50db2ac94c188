//! Upload generated pixels into sampled GPU textures.

use glint_common::Color;

use crate::bloom::{validate_size, BloomPipeline, SceneTexture, SceneUniforms};
use crate::gpu::PhysicalSize;

use super::generate::{radial_gradient_pixels_with_stop, solid_pixels, RADIAL_INNER_STOP};

/// Texel format of every generated texture.
pub const GENERATED_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// A 2D RGBA8 texture with its view and a clamp-to-edge linear sampler.
pub struct GeneratedTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub size: PhysicalSize,
}

impl GeneratedTexture {
    /// Bind this texture for [`crate::bloom::ScenePass::draw_texture`].
    pub fn scene_texture(
        &self,
        device: &wgpu::Device,
        bloom: &BloomPipeline,
        rect: SceneUniforms,
    ) -> SceneTexture {
        bloom.scene_texture(device, &self.view, &self.sampler, rect)
    }
}

/// Upload the radial gradient disc at `size x size`.
pub fn create_radial_gradient_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    size: u32,
) -> Option<GeneratedTexture> {
    create_radial_gradient_texture_with_stop(device, queue, size, RADIAL_INNER_STOP)
}

/// Upload a radial gradient with a custom opaque stop.
pub fn create_radial_gradient_texture_with_stop(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    size: u32,
    inner_stop: f32,
) -> Option<GeneratedTexture> {
    const LABEL: &str = "radial gradient texture";
    let size = PhysicalSize::new(size, size);
    check_size(device, LABEL, size)?;
    let pixels = radial_gradient_pixels_with_stop(size.width, inner_stop)?;
    upload_rgba8(device, queue, LABEL, size, &pixels)
}

/// Upload a `width x height` fill of `color`.
pub fn create_solid_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    width: u32,
    height: u32,
    color: Color,
) -> Option<GeneratedTexture> {
    const LABEL: &str = "solid texture";
    let size = PhysicalSize::new(width, height);
    check_size(device, LABEL, size)?;
    let pixels = solid_pixels(width, height, color.to_rgba8())?;
    upload_rgba8(device, queue, LABEL, size, &pixels)
}

/// Upload an opaque red `width x height` fill.
pub fn create_red_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    width: u32,
    height: u32,
) -> Option<GeneratedTexture> {
    create_solid_texture(device, queue, width, height, Color::RED)
}

/// Reject sizes the device cannot hold before any pixels are generated.
fn check_size(device: &wgpu::Device, label: &str, size: PhysicalSize) -> Option<()> {
    match validate_size(size, device.limits().max_texture_dimension_2d) {
        Ok(()) => Some(()),
        Err(e) => {
            tracing::error!(label, %size, "cannot create texture: {e}");
            None
        }
    }
}

/// Create a texture from tightly packed RGBA8 rows.
///
/// Returns `None` after logging when the size is unusable or the device
/// reports an error during creation or upload.
pub fn upload_rgba8(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    size: PhysicalSize,
    pixels: &[u8],
) -> Option<GeneratedTexture> {
    check_size(device, label, size)?;
    if size.rgba8_len() != Some(pixels.len()) {
        tracing::error!(
            label,
            %size,
            len = pixels.len(),
            "pixel data does not match texture size"
        );
        return None;
    }

    let extent = wgpu::Extent3d {
        width: size.width,
        height: size.height,
        depth_or_array_layers: 1,
    };

    device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: extent,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: GENERATED_FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(size.width * 4),
            rows_per_image: Some(size.height),
        },
        extent,
    );

    let validation = pollster::block_on(device.pop_error_scope());
    let out_of_memory = pollster::block_on(device.pop_error_scope());
    if let Some(err) = validation.or(out_of_memory) {
        tracing::error!(label, %size, "texture upload failed: {err}");
        return None;
    }

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some(label),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    tracing::debug!(label, %size, "texture uploaded");

    Some(GeneratedTexture {
        texture,
        view,
        sampler,
        size,
    })
}
