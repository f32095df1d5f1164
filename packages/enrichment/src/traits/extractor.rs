//! Extraction provider trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::searcher::SearchRecord;

/// Language-model extraction abstraction.
///
/// Given a query and the search results it produced, an implementation
/// returns one short extracted answer. The `instruction` is the user's raw
/// prompt text (conventionally the unexpanded query template) and steers
/// what gets extracted.
///
/// # Implementations
///
/// - [`crate::providers::GroqExtractionProvider`] - Groq chat completions
/// - [`crate::testing::MockExtractionProvider`] - for testing
#[async_trait]
pub trait ExtractionProvider: Send + Sync {
    /// Extract one short answer for `query` from its search results.
    async fn extract(
        &self,
        query: &str,
        records: &[SearchRecord],
        instruction: &str,
    ) -> Result<String>;
}
