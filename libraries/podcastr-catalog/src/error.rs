//! Error types for the episode catalog.

use thiserror::Error;

/// Errors that can occur when reading the episode catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog returned an error response
    #[error("Catalog error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Catalog is offline or unreachable
    #[error("Catalog unreachable: {0}")]
    Unreachable(String),

    /// No episode with this id
    #[error("Episode not found: {0}")]
    NotFound(String),

    /// Invalid catalog URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a catalog response or file
    #[error("Failed to parse catalog data: {0}")]
    ParseError(String),

    /// A record could not be normalized into a playable episode
    #[error("Invalid episode record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    /// IO error reading a catalog file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
