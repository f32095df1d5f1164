//! Error types for the SerpAPI client.

use thiserror::Error;

/// Result type for SerpAPI operations.
pub type Result<T> = std::result::Result<T, SerpError>;

/// SerpAPI client errors.
#[derive(Debug, Error)]
pub enum SerpError {
    /// Network-level failure (connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("SerpAPI error (status {status}): {message}")]
    Api { status: u16, message: String },
}
