//! Pure Google Sheets REST API client (read-only).
//!
//! A minimal client for the `spreadsheets.values.get` endpoint. Fetches one
//! A1-style rectangular range as rows of formatted cell strings.
//!
//! # Example
//!
//! ```rust,ignore
//! use sheets_client::SheetsClient;
//!
//! let client = SheetsClient::new("your-api-key");
//!
//! let range = client.get_values("1BxiMVs0XRA5nFMd...", "Sheet1!A1:D10").await?;
//! for row in &range.values {
//!     println!("{:?}", row);
//! }
//! ```

pub mod error;

pub use error::{Result, SheetsError};

use serde::Deserialize;
use std::fmt;

const BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// A fetched range of cell values.
///
/// `values` holds formatted cell strings, row-major. The API omits trailing
/// empty cells, so rows may be shorter than the requested width; it also
/// omits `values` entirely when the range is empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueRange {
    /// The range actually covered, e.g. "Sheet1!A1:D10".
    pub range: Option<String>,

    /// "ROWS" or "COLUMNS".
    #[serde(rename = "majorDimension")]
    pub major_dimension: Option<String>,

    /// Cell values, one inner vec per row.
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// Read-only Google Sheets client using an API key credential.
pub struct SheetsClient {
    client: reqwest::Client,
    api_key: String,
}

impl SheetsClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Fetch the values of an A1-style range from a spreadsheet.
    pub async fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<ValueRange> {
        let url = format!("{}/{}/values/{}", BASE_URL, spreadsheet_id, range);

        let resp = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let value_range: ValueRange = resp.json().await?;
        tracing::debug!(
            spreadsheet_id,
            range,
            rows = value_range.values.len(),
            "Fetched sheet range"
        );
        Ok(value_range)
    }
}

impl fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetsClient")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
