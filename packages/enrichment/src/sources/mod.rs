//! External tabular sources.
//!
//! CSV bytes are parsed directly by [`crate::table::Table::from_csv`]; this
//! module holds the sources that fetch over the network.

pub mod sheet;

pub use sheet::SheetSource;
