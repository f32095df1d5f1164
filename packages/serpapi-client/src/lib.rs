//! Pure SerpAPI REST client.
//!
//! A minimal client for the SerpAPI search endpoint. Issues a search and
//! returns the organic results; everything else in the response is ignored.
//!
//! # Example
//!
//! ```rust,ignore
//! use serpapi_client::SerpClient;
//!
//! let client = SerpClient::new("your-api-key");
//!
//! let results = client.search("email address of Acme Corp").await?;
//! for result in &results {
//!     println!("{}", result.title.as_deref().unwrap_or("(untitled)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SerpError};
pub use types::{OrganicResult, SearchResponse};

use std::fmt;

const BASE_URL: &str = "https://serpapi.com/search";

/// SerpAPI client.
pub struct SerpClient {
    client: reqwest::Client,
    api_key: String,
    engine: String,
}

impl SerpClient {
    /// Create a new client with the given API key. Searches Google by default.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            engine: "google".to_string(),
        }
    }

    /// Use a different SerpAPI engine (e.g. "bing", "duckduckgo").
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Run a search and return its organic results.
    ///
    /// A query with no organic results returns an empty vec, not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<OrganicResult>> {
        let response = self.search_raw(query).await?;
        Ok(response.organic_results)
    }

    /// Run a search and return the full deserialized response.
    pub async fn search_raw(&self, query: &str) -> Result<SearchResponse> {
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("engine", self.engine.as_str()),
                ("q", query),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SerpError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let response: SearchResponse = resp.json().await?;
        tracing::debug!(
            query,
            organic_results = response.organic_results.len(),
            "SerpAPI search complete"
        );
        Ok(response)
    }
}

impl fmt::Debug for SerpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpClient")
            .field("api_key", &"[REDACTED]")
            .field("engine", &self.engine)
            .finish()
    }
}
