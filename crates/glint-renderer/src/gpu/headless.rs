//! Surface-less device creation for offscreen rendering and tests.

use super::adapter::{open_device, pick_adapter};
use super::types::RendererError;

/// A device and queue with no presentation surface.
pub struct HeadlessGpu {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl HeadlessGpu {
    /// Request any adapter (software fallback allowed) and open a device.
    pub async fn new() -> Result<Self, RendererError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pick_adapter(&instance, None, wgpu::PowerPreference::default()).await?;
        let (device, queue) = open_device(&adapter, "glint headless device").await?;
        Ok(Self { device, queue })
    }

    /// Blocking variant of [`Self::new`].
    pub fn new_blocking() -> Result<Self, RendererError> {
        pollster::block_on(Self::new())
    }
}

/// Copy an RGBA8 texture back to the CPU as tightly packed rows.
///
/// The texture needs `COPY_SRC` usage and a 4-byte-per-texel format.
pub fn read_texture_rgba8(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    texture: &wgpu::Texture,
) -> Result<Vec<u8>, RendererError> {
    let width = texture.width();
    let height = texture.height();
    let unpadded_row = width * 4;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    let padded_row = unpadded_row.div_ceil(align) * align;

    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("readback buffer"),
        size: padded_row as u64 * height as u64,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("readback encoder"),
    });
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &buffer,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(padded_row),
                rows_per_image: Some(height),
            },
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    queue.submit(std::iter::once(encoder.finish()));

    let slice = buffer.slice(..);
    let (tx, rx) = std::sync::mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        let _ = tx.send(result);
    });
    let _ = device.poll(wgpu::Maintain::Wait);

    match rx.recv() {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(RendererError::DeviceError(format!("readback map failed: {e}"))),
        Err(e) => return Err(RendererError::DeviceError(format!("readback channel closed: {e}"))),
    }

    let mut pixels = Vec::with_capacity((unpadded_row * height) as usize);
    {
        let data = slice.get_mapped_range();
        for row in data.chunks(padded_row as usize) {
            pixels.extend_from_slice(&row[..unpadded_row as usize]);
        }
    }
    buffer.unmap();
    Ok(pixels)
}
