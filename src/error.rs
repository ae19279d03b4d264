use thiserror::Error;

use crate::material::MaterialParam;

/// Errors raised by the scene-management core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// Shape name outside the fixed catalog
    #[error("unknown shape `{0}`")]
    UnknownShape(String),

    /// Parameter not declared by the material's shading model
    #[error("material `{material}` has no `{param}` parameter")]
    UnsupportedParameter {
        material: String,
        param: MaterialParam,
    },
}

/// Errors raised by the native rendering engine
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface has no supported texture format")]
    NoSurfaceFormat,

    #[error("failed to acquire frame: {0}")]
    Frame(#[from] wgpu::SurfaceError),
}
