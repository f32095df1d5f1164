//! CSV export of batch results.

use crate::batch::ResultTable;
use crate::error::{EnrichmentError, Result};

/// Fixed export header.
pub const EXPORT_HEADER: [&str; 2] = ["Query", "Extracted Information"];

/// Serialize a result table to CSV bytes.
///
/// Embedded delimiters, quotes and newlines are quoted per RFC 4180.
pub fn to_csv(table: &ResultTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(EXPORT_HEADER)
        .map_err(|e| EnrichmentError::MalformedInput(e.to_string()))?;
    for row in table {
        writer
            .write_record([row.query.as_str(), row.extracted.as_str()])
            .map_err(|e| EnrichmentError::MalformedInput(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| EnrichmentError::MalformedInput(e.to_string()))
}

/// Parse bytes produced by [`to_csv`] back into a result table.
pub fn from_csv(bytes: &[u8]) -> Result<ResultTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| EnrichmentError::MalformedInput(e.to_string()))?;
    if headers.iter().ne(EXPORT_HEADER) {
        return Err(EnrichmentError::MalformedInput(format!(
            "unexpected export header: {:?}",
            headers.iter().collect::<Vec<_>>()
        )));
    }

    let mut table = ResultTable::new();
    for record in reader.records() {
        let record = record.map_err(|e| EnrichmentError::MalformedInput(e.to_string()))?;
        table.push(&record[0], &record[1]);
    }
    Ok(table)
}
