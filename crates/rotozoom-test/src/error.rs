//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture surface could not be built
    #[error("core error: {0}")]
    Core(#[from] rotozoom_core::Error),

    /// Failed to write a surface dump
    #[error("failed to write surface '{path}': {message}")]
    SurfaceWrite { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
