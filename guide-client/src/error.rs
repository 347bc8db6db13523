//! Client error types

use std::time::Duration;

use guide_core::GuideError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading a local catalog file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Operation did not finish in time
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catalog content rejected by the domain layer
    #[error(transparent)]
    Guide(#[from] GuideError),

    /// Required configuration is missing
    #[error("Not configured: {0}")]
    NotConfigured(&'static str),
}

impl ClientError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
