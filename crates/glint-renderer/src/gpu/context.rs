use std::sync::Arc;
use winit::window::Window;

use super::adapter::{open_device, pick_adapter};
use super::types::{PhysicalSize, RendererError};

/// A device bound to a window surface.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize,
}

impl GpuContext {
    pub async fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let inner = window.inner_size();
        let size = clamp_size(inner.width, inner.height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window)
            .map_err(|e| RendererError::SurfaceError(e.to_string()))?;

        let adapter =
            pick_adapter(&instance, Some(&surface), wgpu::PowerPreference::HighPerformance)
                .await?;
        let (device, queue) = open_device(&adapter, "glint surface device").await?;

        let formats = surface.get_capabilities(&adapter).formats;
        let surface_config = surface_config(preferred_surface_format(&formats), size);
        surface.configure(&device, &surface_config);
        tracing::info!(format = ?surface_config.format, %size, "surface configured");

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            size,
        })
    }

    /// Reconfigure for a new window size. Zero sides are raised to 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = clamp_size(width, height);
        self.surface_config.width = self.size.width;
        self.surface_config.height = self.size.height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }
}

fn clamp_size(width: u32, height: u32) -> PhysicalSize {
    PhysicalSize::new(width.max(1), height.max(1))
}

fn surface_config(format: wgpu::TextureFormat, size: PhysicalSize) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width,
        height: size.height,
        present_mode: wgpu::PresentMode::Fifo,
        desired_maximum_frame_latency: 2,
        alpha_mode: wgpu::CompositeAlphaMode::Auto,
        view_formats: vec![],
    }
}

/// First non-sRGB format, else the first advertised one.
///
/// The composite shader writes final values, so an sRGB surface would
/// encode them a second time.
pub fn preferred_surface_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
        .unwrap_or(wgpu::TextureFormat::Bgra8Unorm)
}
