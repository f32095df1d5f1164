//! Sequential batch runner.
//!
//! Runs every generated query through search then extraction, strictly one
//! query at a time and in input order. A failed query never blocks the rest
//! of the batch; the output always has exactly one row per input query.

use tracing::warn;

use crate::traits::{ExtractionProvider, SearchProvider};

/// Output written when a query's search returned no results. The extraction
/// provider is not called for such rows.
pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// Output written for a failed row under [`FailureMode::RecordError`].
pub const PROCESSING_ERROR_MESSAGE: &str = "Error in processing";

/// How provider failures surface in the result table.
///
/// Either way the batch keeps going; the mode only controls what lands in
/// the failed row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Degrade silently: a failed search counts as zero results (so the row
    /// reads [`NO_RESULTS_MESSAGE`]), a failed extraction as an empty
    /// answer.
    #[default]
    TreatAsEmpty,

    /// Write [`PROCESSING_ERROR_MESSAGE`] into the failed row.
    RecordError,
}

/// Batch run configuration.
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// User instruction passed through to the extraction provider,
    /// conventionally the raw (unexpanded) query template.
    pub instruction: String,

    /// Failure surfacing policy.
    pub failure_mode: FailureMode,
}

impl BatchConfig {
    /// Create a config with the default failure mode.
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            failure_mode: FailureMode::default(),
        }
    }

    /// Set the failure mode.
    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }
}

/// One enriched row of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// The concrete query that was searched.
    pub query: String,

    /// The extracted answer, a sentinel, or an error marker.
    pub extracted: String,
}

/// Ordered `(query, extracted)` pairs, one per input query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Create an empty result table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row.
    pub fn push(&mut self, query: impl Into<String>, extracted: impl Into<String>) {
        self.rows.push(ResultRow {
            query: query.into(),
            extracted: extracted.into(),
        });
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }

    /// The rows as a slice.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Run every query through search then extraction, sequentially.
///
/// For each query, in input order:
/// 1. search; a failure is handled per [`FailureMode`]
/// 2. zero results → the row reads [`NO_RESULTS_MESSAGE`] and extraction is
///    skipped
/// 3. otherwise extract; a failure is handled per [`FailureMode`]
///
/// No retries, no concurrency, no early termination.
pub async fn run_batch<S, E>(
    queries: &[String],
    search: &S,
    extract: &E,
    config: &BatchConfig,
) -> ResultTable
where
    S: SearchProvider + ?Sized,
    E: ExtractionProvider + ?Sized,
{
    let mut table = ResultTable::new();

    for query in queries {
        let records = match search.search(query).await {
            Ok(records) => records,
            Err(e) => {
                warn!(query = %query, error = %e, "Search failed");
                match config.failure_mode {
                    FailureMode::TreatAsEmpty => Vec::new(),
                    FailureMode::RecordError => {
                        table.push(query.clone(), PROCESSING_ERROR_MESSAGE);
                        continue;
                    }
                }
            }
        };

        let extracted = if records.is_empty() {
            NO_RESULTS_MESSAGE.to_string()
        } else {
            match extract.extract(query, &records, &config.instruction).await {
                Ok(answer) => answer,
                Err(e) => {
                    warn!(query = %query, error = %e, "Extraction failed");
                    match config.failure_mode {
                        FailureMode::TreatAsEmpty => String::new(),
                        FailureMode::RecordError => PROCESSING_ERROR_MESSAGE.to_string(),
                    }
                }
            }
        };

        table.push(query.clone(), extracted);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockExtractionProvider, MockSearchProvider};
    use crate::traits::SearchRecord;

    fn queries(qs: &[&str]) -> Vec<String> {
        qs.iter().map(|q| q.to_string()).collect()
    }

    #[tokio::test]
    async fn output_length_matches_input_in_order() {
        let search = MockSearchProvider::new()
            .with_results("q1", vec![SearchRecord::new("t", "l", "s")])
            .with_results("q2", vec![SearchRecord::new("t", "l", "s")]);
        let extract = MockExtractionProvider::new()
            .with_answer("q1", "a1")
            .with_answer("q2", "a2");

        let table = run_batch(
            &queries(&["q1", "q2"]),
            &search,
            &extract,
            &BatchConfig::new("instruction"),
        )
        .await;

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].query, "q1");
        assert_eq!(table.rows()[0].extracted, "a1");
        assert_eq!(table.rows()[1].query, "q2");
        assert_eq!(table.rows()[1].extracted, "a2");
    }

    #[tokio::test]
    async fn empty_search_skips_extraction() {
        let search = MockSearchProvider::new(); // unseeded: every query returns no results
        let extract = MockExtractionProvider::new();

        let table = run_batch(
            &queries(&["nothing here"]),
            &search,
            &extract,
            &BatchConfig::new("instruction"),
        )
        .await;

        assert_eq!(table.rows()[0].extracted, NO_RESULTS_MESSAGE);
        assert_eq!(extract.call_count(), 0);
    }

    #[tokio::test]
    async fn search_failure_treated_as_empty_by_default() {
        let search = MockSearchProvider::new().with_failure("boom");
        let extract = MockExtractionProvider::new();

        let table = run_batch(
            &queries(&["boom"]),
            &search,
            &extract,
            &BatchConfig::new("instruction"),
        )
        .await;

        assert_eq!(table.rows()[0].extracted, NO_RESULTS_MESSAGE);
        assert_eq!(extract.call_count(), 0);
    }

    #[tokio::test]
    async fn search_failure_recorded_in_strict_mode() {
        let search = MockSearchProvider::new().with_failure("boom");
        let extract = MockExtractionProvider::new();

        let config = BatchConfig::new("instruction").with_failure_mode(FailureMode::RecordError);
        let table = run_batch(&queries(&["boom"]), &search, &extract, &config).await;

        assert_eq!(table.rows()[0].extracted, PROCESSING_ERROR_MESSAGE);
        assert_eq!(extract.call_count(), 0);
    }

    #[tokio::test]
    async fn extraction_failure_does_not_block_later_queries() {
        let search = MockSearchProvider::new()
            .with_results("q1", vec![SearchRecord::new("t", "l", "s")])
            .with_results("q2", vec![SearchRecord::new("t", "l", "s")]);
        let extract = MockExtractionProvider::new()
            .with_failure("q1")
            .with_answer("q2", "a2");

        let config = BatchConfig::new("instruction").with_failure_mode(FailureMode::RecordError);
        let table = run_batch(&queries(&["q1", "q2"]), &search, &extract, &config).await;

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].extracted, PROCESSING_ERROR_MESSAGE);
        assert_eq!(table.rows()[1].extracted, "a2");
    }

    #[tokio::test]
    async fn extraction_failure_degrades_to_empty_in_default_mode() {
        let search =
            MockSearchProvider::new().with_results("q1", vec![SearchRecord::new("t", "l", "s")]);
        let extract = MockExtractionProvider::new().with_failure("q1");

        let table = run_batch(
            &queries(&["q1"]),
            &search,
            &extract,
            &BatchConfig::new("instruction"),
        )
        .await;

        assert_eq!(table.rows()[0].extracted, "");
    }

    #[tokio::test]
    async fn instruction_reaches_the_extraction_provider() {
        let search =
            MockSearchProvider::new().with_results("q1", vec![SearchRecord::new("t", "l", "s")]);
        let extract = MockExtractionProvider::new().with_answer("q1", "a1");

        run_batch(
            &queries(&["q1"]),
            &search,
            &extract,
            &BatchConfig::new("Find HQ of {company}"),
        )
        .await;

        assert_eq!(
            extract.last_instruction().as_deref(),
            Some("Find HQ of {company}")
        );
    }
}
