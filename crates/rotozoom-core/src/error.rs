//! Error types for rotozoom-core
//!
//! Provides a unified error type for surface construction and pixel access.
//! Each variant captures enough context for diagnostics without exposing
//! internal buffer layout.

use thiserror::Error;

/// rotozoom-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid surface dimensions
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Row stride too small for the requested width
    #[error("invalid pitch: {pitch} bytes, at least {min} required")]
    InvalidPitch { pitch: u32, min: u32 },

    /// Unknown pixel size
    #[error("invalid pixel format: {0} bytes per pixel")]
    InvalidFormat(u32),

    /// Operation needs a different pixel format
    #[error("unsupported pixel format: {0} bytes per pixel")]
    UnsupportedFormat(u32),

    /// Pixel coordinate outside the surface
    #[error("pixel ({x}, {y}) outside {width}x{height} surface")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Memory allocation failed
    #[error("memory allocation failed")]
    AllocationFailed,
}

/// Result type alias for rotozoom-core operations
pub type Result<T> = std::result::Result<T, Error>;
