//! SerpAPI response types.
//!
//! Only the fields this client consumes are modeled; SerpAPI responses carry
//! many more sections (ads, knowledge graph, pagination) that deserialization
//! ignores.

use serde::{Deserialize, Serialize};

/// Top-level search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Unpaid result entries. Absent entirely for zero-result queries.
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
}

/// A single organic (unpaid) search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganicResult {
    /// 1-based rank within the organic results.
    pub position: Option<u32>,

    /// Result title.
    pub title: Option<String>,

    /// Result URL.
    pub link: Option<String>,

    /// Short text excerpt shown under the title.
    pub snippet: Option<String>,
}
