//! Error types for the stage.
//!
//! The simulation cores are total functions over valid numeric state and
//! have no error domain; everything that can fail lives in the windowing and
//! GPU setup path.

use std::fmt;

/// Errors from GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    AdapterRequest(wgpu::RequestAdapterError),
    /// Failed to create the GPU device.
    DeviceRequest(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::AdapterRequest(e) => write!(
                f,
                "No compatible GPU adapter found ({}). Ensure your system has Vulkan/Metal/DX12 support.",
                e
            ),
            GpuError::DeviceRequest(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::AdapterRequest(e) => Some(e),
            GpuError::DeviceRequest(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        GpuError::AdapterRequest(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceRequest(e)
    }
}

/// Errors from running a stage.
#[derive(Debug)]
pub enum StageError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            StageError::Window(e) => write!(f, "Failed to create window: {}", e),
            StageError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StageError::EventLoop(e) => Some(e),
            StageError::Window(e) => Some(e),
            StageError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for StageError {
    fn from(e: winit::error::EventLoopError) -> Self {
        StageError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for StageError {
    fn from(e: winit::error::OsError) -> Self {
        StageError::Window(e)
    }
}

impl From<GpuError> for StageError {
    fn from(e: GpuError) -> Self {
        StageError::Gpu(e)
    }
}
