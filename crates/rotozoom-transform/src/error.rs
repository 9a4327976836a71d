//! Error types for rotozoom-transform

use thiserror::Error;

/// Errors that can occur during rotation and zoom
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rotozoom_core::Error),

    /// Source surface is not 32-bit RGBA
    #[error("unsupported pixel format: {0} bits per pixel")]
    UnsupportedFormat(u32),

    /// The rotozoom path was asked for a rotation it cannot distinguish from zero
    #[error("rotation angle {angle} is too small for rotozoom; use zoom_surface")]
    ZeroAngleRotation { angle: f64 },

    /// A temporary increment table could not be reserved
    #[error("failed to allocate increment table")]
    AllocationFailed,
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
