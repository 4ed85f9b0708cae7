//! API error types

use std::str::Utf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// I/O error while draining a reader input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Token bytes are not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] Utf8Error),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
