//! Error types for the guide domain

use thiserror::Error;

/// Guide error types
#[derive(Debug, Error)]
pub enum GuideError {
    /// A catalog document could not be decoded
    #[error("Invalid {catalog} catalog: {source}")]
    InvalidCatalog {
        catalog: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Neither the requested nor the default apartment exists
    #[error("Apartment not found: {0}")]
    ApartmentNotFound(String),

    /// Language code outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl GuideError {
    /// Wrap a decode failure for the named catalog
    pub fn invalid_catalog(catalog: &'static str, source: serde_json::Error) -> Self {
        Self::InvalidCatalog { catalog, source }
    }
}

/// Result type for guide operations
pub type GuideResult<T> = Result<T, GuideError>;
