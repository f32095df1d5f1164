//! Google Sheets tabular source.

use sheets_client::SheetsClient;

use crate::error::{EnrichmentError, Result};
use crate::table::Table;

/// Tabular source that fetches an A1-style range from a spreadsheet.
///
/// The first fetched row becomes the table header.
#[derive(Debug)]
pub struct SheetSource {
    client: SheetsClient,
}

impl SheetSource {
    /// Create a new source with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: SheetsClient::new(api_key),
        }
    }

    /// Wrap an already-configured client.
    pub fn with_client(client: SheetsClient) -> Self {
        Self { client }
    }

    /// Fetch a range and build a table from it.
    ///
    /// A fetch failure (network, auth, unknown sheet or range) surfaces as
    /// [`EnrichmentError::SourceUnavailable`]; a range with no values at all
    /// surfaces as [`EnrichmentError::NoData`].
    pub async fn fetch(&self, spreadsheet_id: &str, range: &str) -> Result<Table> {
        let value_range = self
            .client
            .get_values(spreadsheet_id, range)
            .await
            .map_err(|e| EnrichmentError::SourceUnavailable(Box::new(e)))?;

        Table::from_values(value_range.values).ok_or_else(|| EnrichmentError::NoData {
            range: range.to_string(),
        })
    }
}
