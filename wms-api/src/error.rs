//! Error types for API access.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for remote API operations.
///
/// Variants map one-to-one onto the failure classes callers distinguish:
/// transport failures, non-2xx statuses (carrying the HTTP status), and
/// malformed response bodies. Callers convert these into component-local
/// error messages; nothing is retried automatically.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or transport failure before a response arrived.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error: {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response body did not decode as the expected JSON shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration was missing before any request could be made.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// The HTTP status for non-success responses, if that is what failed.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for Results using ApiError.
pub type Result<T> = std::result::Result<T, ApiError>;
