//! Error types for fleet-transform crate.

use thiserror::Error;

/// Errors that can occur when building a frame transformation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl TransformError {
    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter(reason.into())
    }
}

/// Result type for transform operations.
pub type TransformResult<T> = std::result::Result<T, TransformError>;
