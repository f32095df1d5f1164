//! Error types for the Groq client.

use thiserror::Error;

/// Result type for Groq client operations.
pub type Result<T> = std::result::Result<T, GroqError>;

/// Groq client errors.
#[derive(Debug, Error)]
pub enum GroqError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-level failure (connection, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("Groq API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Completion came back without any message content
    #[error("completion contained no content")]
    EmptyCompletion,
}
