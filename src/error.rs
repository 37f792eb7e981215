use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create window: {0}")]
    WindowCreation(#[from] winit::error::OsError),
    #[error(transparent)]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error(transparent)]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error(transparent)]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface capabilities contain no texture format")]
    SurfaceCapabilitiesNoFormats,
    #[error("GPU ran out of memory while acquiring a frame")]
    SurfaceOutOfMemory,
    #[error("winit event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

pub type Result<T> = std::result::Result<T, AppError>;
