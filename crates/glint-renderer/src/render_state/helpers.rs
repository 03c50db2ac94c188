use std::sync::atomic::{AtomicBool, Ordering};

use crate::gpu::{GpuContext, RendererError};

pub(super) fn acquire_frame(gpu: &GpuContext) -> Result<wgpu::SurfaceTexture, RendererError> {
    match gpu.current_texture() {
        Ok(t) => Ok(t),
        Err(e) => {
            tracing::error!("Failed to get surface texture: {e}");
            Err(e.into())
        }
    }
}

pub(super) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: AtomicBool = AtomicBool::new(false);
    if !PRESENTED.swap(true, Ordering::Relaxed) {
        tracing::info!(width, height, ?format, "first frame presented");
    }
}
