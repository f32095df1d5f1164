//! Typed errors for the enrichment library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while loading tables or running a batch.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// External tabular source unreachable (network, auth, unknown sheet)
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Delimited payload failed to parse
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Fetched range contained no values
    #[error("no data found in range: {range}")]
    NoData { range: String },

    /// Search or extraction call failed
    #[error("provider error: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Requested column is not in the table header
    #[error("unknown column {name:?} (available: {available:?})")]
    UnknownColumn {
        name: String,
        available: Vec<String>,
    },
}

/// Result type alias for enrichment operations.
pub type Result<T> = std::result::Result<T, EnrichmentError>;
