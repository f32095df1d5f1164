//! SerpAPI-backed search provider.

use async_trait::async_trait;
use serpapi_client::SerpClient;

use crate::error::{EnrichmentError, Result};
use crate::traits::{SearchProvider, SearchRecord};

/// Search provider backed by SerpAPI's Google engine.
#[derive(Debug)]
pub struct SerpSearchProvider {
    client: SerpClient,
}

impl SerpSearchProvider {
    /// Create a new provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: SerpClient::new(api_key),
        }
    }

    /// Wrap an already-configured client (custom engine, etc.).
    pub fn with_client(client: SerpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchProvider for SerpSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchRecord>> {
        let results = self
            .client
            .search(query)
            .await
            .map_err(|e| EnrichmentError::Provider(Box::new(e)))?;

        // SerpAPI fields are all optional on the wire; absent ones become
        // empty strings rather than dropping the record.
        Ok(results
            .into_iter()
            .map(|r| SearchRecord {
                title: r.title.unwrap_or_default(),
                link: r.link.unwrap_or_default(),
                snippet: r.snippet.unwrap_or_default(),
            })
            .collect())
    }
}
