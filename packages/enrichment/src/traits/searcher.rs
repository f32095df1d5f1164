//! Search provider trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One organic web-search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Result title.
    pub title: String,

    /// Result URL.
    pub link: String,

    /// Short text excerpt shown under the title.
    pub snippet: String,
}

impl SearchRecord {
    /// Create a new search record.
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }
}

/// Web search abstraction.
///
/// # Implementations
///
/// - [`crate::providers::SerpSearchProvider`] - SerpAPI
/// - [`crate::testing::MockSearchProvider`] - for testing
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search the web for the query, returning organic results in rank
    /// order. A query that matches nothing returns an empty vec, not an
    /// error.
    async fn search(&self, query: &str) -> Result<Vec<SearchRecord>>;

    /// Search with a result cap.
    async fn search_with_limit(&self, query: &str, limit: usize) -> Result<Vec<SearchRecord>> {
        let mut records = self.search(query).await?;
        records.truncate(limit);
        Ok(records)
    }
}
