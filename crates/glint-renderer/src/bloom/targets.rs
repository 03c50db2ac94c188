//! Offscreen render targets for the scene and both blur passes.

use crate::gpu::{PhysicalSize, RendererError};

use super::types::{DEPTH_FORMAT, TARGET_FORMAT};

/// One offscreen color texture and the view it is attached through.
pub struct RenderTarget {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl RenderTarget {
    fn new(device: &wgpu::Device, size: PhysicalSize, label: &str) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: extent(size),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TARGET_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    pub fn size(&self) -> PhysicalSize {
        PhysicalSize::new(self.texture.width(), self.texture.height())
    }
}

/// The three color targets plus the scene depth buffer, always one size.
pub struct BloomTargets {
    pub scene: RenderTarget,
    pub depth: RenderTarget,
    pub blur_a: RenderTarget,
    pub blur_b: RenderTarget,
    size: PhysicalSize,
}

impl BloomTargets {
    /// Allocate all targets at `width x height`.
    ///
    /// Allocation runs inside an out-of-memory error scope so a failed
    /// allocation surfaces as [`RendererError::ResourceAllocation`].
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Result<Self, RendererError> {
        let size = PhysicalSize::new(width, height);
        validate_size(size, device.limits().max_texture_dimension_2d)?;

        device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        let scene = RenderTarget::new(device, size, "bloom scene target");
        let depth = depth_target(device, size);
        let blur_a = RenderTarget::new(device, size, "bloom blur_a target");
        let blur_b = RenderTarget::new(device, size, "bloom blur_b target");
        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(RendererError::ResourceAllocation(format!(
                "render targets {size}: {err}"
            )));
        }

        Ok(Self {
            scene,
            depth,
            blur_a,
            blur_b,
            size,
        })
    }

    pub fn size(&self) -> PhysicalSize {
        self.size
    }

    /// The three color targets in pipeline order.
    pub fn color_targets(&self) -> [&RenderTarget; 3] {
        [&self.scene, &self.blur_a, &self.blur_b]
    }
}

/// Reject sizes the device cannot allocate.
pub fn validate_size(size: PhysicalSize, max_dimension: u32) -> Result<(), RendererError> {
    if size.is_empty() {
        return Err(RendererError::ResourceAllocation(format!(
            "render target size {size} has a zero dimension"
        )));
    }
    if size.width > max_dimension || size.height > max_dimension {
        return Err(RendererError::ResourceAllocation(format!(
            "render target size {size} exceeds device limit {max_dimension}"
        )));
    }
    Ok(())
}

fn depth_target(device: &wgpu::Device, size: PhysicalSize) -> RenderTarget {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("bloom scene depth"),
        size: extent(size),
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    RenderTarget { texture, view }
}

fn extent(size: PhysicalSize) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: size.width,
        height: size.height,
        depth_or_array_layers: 1,
    }
}
