//! # Catalog Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Request        │  │  NotFound               │ │
//! │  │  InvalidUrl     │  │  ServerFailed   │  │  Http (non-2xx)         │ │
//! │  │  SeedFailed     │  │                 │  │  Decode                 │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error type.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid catalog configuration.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Base URL could not be parsed or is not http(s).
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// The db.json seed could not be read or parsed.
    #[error("Failed to load catalog seed: {0}")]
    SeedFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request never produced a response (connect, timeout, TLS).
    #[error("Catalog request failed: {0}")]
    Request(String),

    /// The local catalog server could not start.
    #[error("Catalog server failed: {0}")]
    ServerFailed(String),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The catalog has no such resource.
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// The catalog answered with a non-success status.
    #[error("Catalog returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Creates a NotFound error for a resource and id.
    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        CatalogError::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    /// Returns true if the catalog does not know the requested resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidUrl(err.to_string())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Request(err.to_string())
        }
    }
}
