//! Testing utilities including mock providers.
//!
//! Useful for testing applications that use the enrichment pipeline without
//! making real search or LLM calls. Both mocks record every call they
//! receive so tests can assert on call counts and arguments.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{EnrichmentError, Result};
use crate::traits::{ExtractionProvider, SearchProvider, SearchRecord};

fn mock_failure(what: &str, query: &str) -> EnrichmentError {
    EnrichmentError::Provider(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("mock {what} failure for {query:?}"),
    )))
}

/// Mock search provider with seeded results and scripted failures.
///
/// Unseeded queries return no results, matching a search engine that found
/// nothing.
#[derive(Default)]
pub struct MockSearchProvider {
    results: Arc<RwLock<HashMap<String, Vec<SearchRecord>>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockSearchProvider {
    /// Create a new mock searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed results for a query.
    pub fn with_results(self, query: impl Into<String>, records: Vec<SearchRecord>) -> Self {
        self.results.write().unwrap().insert(query.into(), records);
        self
    }

    /// Make a query fail with a provider error.
    pub fn with_failure(self, query: impl Into<String>) -> Self {
        self.failing.write().unwrap().insert(query.into());
        self
    }

    /// Number of `search` calls received.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Queries received, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &str) -> Result<Vec<SearchRecord>> {
        self.calls.write().unwrap().push(query.to_string());

        if self.failing.read().unwrap().contains(query) {
            return Err(mock_failure("search", query));
        }

        Ok(self
            .results
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}

/// Record of one `extract` call received by [`MockExtractionProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractCall {
    pub query: String,
    pub record_count: usize,
    pub instruction: String,
}

/// Mock extraction provider with seeded answers and scripted failures.
///
/// Unseeded queries return an empty answer.
#[derive(Default)]
pub struct MockExtractionProvider {
    answers: Arc<RwLock<HashMap<String, String>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    calls: Arc<RwLock<Vec<ExtractCall>>>,
}

impl MockExtractionProvider {
    /// Create a new mock extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the answer for a query.
    pub fn with_answer(self, query: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers
            .write()
            .unwrap()
            .insert(query.into(), answer.into());
        self
    }

    /// Make a query fail with a provider error.
    pub fn with_failure(self, query: impl Into<String>) -> Self {
        self.failing.write().unwrap().insert(query.into());
        self
    }

    /// Number of `extract` calls received.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Calls received, in order.
    pub fn calls(&self) -> Vec<ExtractCall> {
        self.calls.read().unwrap().clone()
    }

    /// Instruction text of the most recent call, if any.
    pub fn last_instruction(&self) -> Option<String> {
        self.calls
            .read()
            .unwrap()
            .last()
            .map(|c| c.instruction.clone())
    }
}

#[async_trait]
impl ExtractionProvider for MockExtractionProvider {
    async fn extract(
        &self,
        query: &str,
        records: &[SearchRecord],
        instruction: &str,
    ) -> Result<String> {
        self.calls.write().unwrap().push(ExtractCall {
            query: query.to_string(),
            record_count: records.len(),
            instruction: instruction.to_string(),
        });

        if self.failing.read().unwrap().contains(query) {
            return Err(mock_failure("extraction", query));
        }

        Ok(self
            .answers
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_search_returns_seeded_results() {
        let searcher = MockSearchProvider::new().with_results(
            "acme hq",
            vec![SearchRecord::new("Acme", "https://acme.test", "HQ info")],
        );

        let records = searcher.search("acme hq").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Acme");

        let empty = searcher.search("unseeded").await.unwrap();
        assert!(empty.is_empty());
        assert_eq!(searcher.calls(), vec!["acme hq", "unseeded"]);
    }

    #[tokio::test]
    async fn mock_search_scripted_failure() {
        let searcher = MockSearchProvider::new().with_failure("bad");
        assert!(searcher.search("bad").await.is_err());
        assert_eq!(searcher.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_extractor_records_call_details() {
        let extractor = MockExtractionProvider::new().with_answer("q", "answer");

        let records = vec![SearchRecord::new("t", "l", "s")];
        let answer = extractor.extract("q", &records, "do the thing").await.unwrap();

        assert_eq!(answer, "answer");
        let calls = extractor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].record_count, 1);
        assert_eq!(calls[0].instruction, "do the thing");
    }
}
