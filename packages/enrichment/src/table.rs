//! In-memory tabular data.
//!
//! A [`Table`] is built once from a source (CSV bytes or a fetched sheet
//! range) and never mutated afterwards. The first row of any source is the
//! header and defines the column set; every data row carries exactly one
//! value per column.

use crate::error::{EnrichmentError, Result};

/// An ordered sequence of rows sharing one column set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse a delimited-text payload. The first line is the header.
    ///
    /// Ragged payloads (rows whose field count differs from the header) are
    /// rejected as malformed rather than silently padded.
    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| EnrichmentError::MalformedInput(e.to_string()))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| EnrichmentError::MalformedInput(e.to_string()))?;
            rows.push(record.iter().map(|f| f.to_string()).collect());
        }

        Ok(Self { columns, rows })
    }

    /// Build a table from raw row-major values; the first row is the header.
    ///
    /// Returns `None` when `values` is empty (no header row). Data rows
    /// shorter than the header are padded with empty strings and longer rows
    /// are truncated, since range fetches omit trailing empty cells.
    pub fn from_values(mut values: Vec<Vec<String>>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let columns = values.remove(0);
        let width = columns.len();
        let rows = values
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Some(Self { columns, rows })
    }

    /// Column names, in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the data rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<String>> {
        let idx = self
            .columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| EnrichmentError::UnknownColumn {
                name: name.to_string(),
                available: self.columns.clone(),
            })?;
        Ok(self.rows.iter().map(|row| row[idx].clone()).collect())
    }
}

/// A borrowed view of one data row, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl<'a> Row<'a> {
    /// Value of the named column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.values.get(idx).map(|v| v.as_str())
    }

    /// Raw values in column order.
    pub fn values(&self) -> &'a [String] {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_csv_with_header() {
        let bytes = b"company,city\nAcme,New York\nGlobex,Springfield\n";
        let table = Table::from_csv(bytes).unwrap();

        assert_eq!(table.columns(), ["company", "city"]);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.column("company").unwrap(),
            vec!["Acme".to_string(), "Globex".to_string()]
        );
    }

    #[test]
    fn quoted_fields_survive_parsing() {
        let bytes = b"name,notes\n\"Acme, Inc.\",\"line one\nline two\"\n";
        let table = Table::from_csv(bytes).unwrap();

        assert_eq!(table.column("name").unwrap(), vec!["Acme, Inc.".to_string()]);
        assert_eq!(
            table.column("notes").unwrap(),
            vec!["line one\nline two".to_string()]
        );
    }

    #[test]
    fn ragged_csv_is_malformed() {
        let bytes = b"a,b\n1,2,3\n";
        let err = Table::from_csv(bytes).unwrap_err();
        assert!(matches!(err, EnrichmentError::MalformedInput(_)));
    }

    #[test]
    fn unknown_column_lists_available() {
        let table = Table::from_csv(b"a,b\n1,2\n").unwrap();
        match table.column("missing").unwrap_err() {
            EnrichmentError::UnknownColumn { name, available } => {
                assert_eq!(name, "missing");
                assert_eq!(available, vec!["a".to_string(), "b".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_values_uses_first_row_as_header() {
        let values = vec![
            vec!["company".to_string(), "city".to_string()],
            vec!["Acme".to_string(), "New York".to_string()],
        ];
        let table = Table::from_values(values).unwrap();
        assert_eq!(table.columns(), ["company", "city"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn from_values_pads_and_truncates_to_header_width() {
        let values = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["short".to_string()],
            vec!["x".to_string(), "y".to_string(), "extra".to_string()],
        ];
        let table = Table::from_values(values).unwrap();

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0].values(), ["short", ""]);
        assert_eq!(rows[1].values(), ["x", "y"]);
    }

    #[test]
    fn from_values_empty_is_none() {
        assert!(Table::from_values(Vec::new()).is_none());
    }

    #[test]
    fn row_get_by_column_name() {
        let table = Table::from_csv(b"company,city\nAcme,New York\n").unwrap();
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("city"), Some("New York"));
        assert_eq!(row.get("missing"), None);
    }
}
