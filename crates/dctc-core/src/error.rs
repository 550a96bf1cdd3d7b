//! Error types for compression and evaluation

use thiserror::Error;

/// Result type for engine operations
pub type DctResult<T> = Result<T, DctError>;

/// Errors that can occur while compressing or evaluating an image
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DctError {
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DctError {
    /// True for errors caused by the geometry of the input rather than by a
    /// caller-supplied parameter.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            DctError::InvalidShape(_)
                | DctError::InvalidDimensions { .. }
                | DctError::BufferSizeMismatch { .. }
        )
    }
}
