/// Errors that can occur while building or driving GPU resources.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("shader compile error in {label}: {diagnostic}")]
    ShaderCompile { label: String, diagnostic: String },

    #[error("program link error in {label}: {diagnostic}")]
    ProgramLink { label: String, diagnostic: String },

    #[error("resource allocation error: {0}")]
    ResourceAllocation(String),
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<RendererError> for glint_common::GlintError {
    fn from(e: RendererError) -> Self {
        glint_common::GlintError::Renderer(e.to_string())
    }
}

/// Physical pixel dimensions.
pub type PhysicalSize = glint_common::Size;
