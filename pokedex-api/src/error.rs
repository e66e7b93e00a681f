//! API error types.

use thiserror::Error;

/// Errors that can occur talking to the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested entity does not exist remotely (HTTP 404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Request timed out.
    #[error("API request timed out")]
    Timeout,

    /// Network-level failure (connect error, non-2xx status, ...).
    #[error("API request failed: {0}")]
    Transport(String),

    /// Response body was not the expected JSON shape.
    #[error("Failed to decode API response: {0}")]
    Decode(String),

    /// The operation was cancelled by its caller.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, ApiError>;
