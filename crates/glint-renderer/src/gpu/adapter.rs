//! Adapter and device selection shared by windowed and headless contexts.

use super::types::RendererError;

/// Ask for the default adapter, then for a software one.
pub(crate) async fn pick_adapter(
    instance: &wgpu::Instance,
    surface: Option<&wgpu::Surface<'_>>,
    power_preference: wgpu::PowerPreference,
) -> Result<wgpu::Adapter, RendererError> {
    let primary = wgpu::RequestAdapterOptions {
        power_preference,
        force_fallback_adapter: false,
        compatible_surface: surface,
    };
    if let Some(adapter) = instance.request_adapter(&primary).await {
        return Ok(adapter);
    }

    tracing::warn!("no hardware adapter, requesting software fallback");
    let fallback = wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::LowPower,
        force_fallback_adapter: true,
        compatible_surface: surface,
    };
    instance
        .request_adapter(&fallback)
        .await
        .ok_or(RendererError::AdapterNotFound)
}

/// Open a device with downlevel limits raised to the adapter's texture sizes.
pub(crate) async fn open_device(
    adapter: &wgpu::Adapter,
    label: &str,
) -> Result<(wgpu::Device, wgpu::Queue), RendererError> {
    let info = adapter.get_info();
    tracing::info!(
        adapter = %info.name,
        device_type = ?info.device_type,
        backend = ?info.backend,
        "opening GPU device"
    );

    let descriptor = wgpu::DeviceDescriptor {
        label: Some(label),
        required_features: wgpu::Features::empty(),
        required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
        memory_hints: wgpu::MemoryHints::default(),
    };
    Ok(adapter.request_device(&descriptor, None).await?)
}
