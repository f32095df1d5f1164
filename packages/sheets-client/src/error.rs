//! Error types for the Google Sheets client.

use thiserror::Error;

/// Result type for Sheets client operations.
pub type Result<T> = std::result::Result<T, SheetsError>;

/// Google Sheets client errors.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// Network-level failure (connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API (bad key, unknown sheet, bad range)
    #[error("Sheets API error (status {status}): {message}")]
    Api { status: u16, message: String },
}
