//! Batch Row Enrichment Library
//!
//! A query-driven enrichment pipeline: take a table of entities, generate one
//! natural-language search query per row from a user-supplied template, run
//! each query through a web search, summarize each query's results with an
//! LLM, and export the answers as CSV.
//!
//! # Design Philosophy
//!
//! - Providers are capabilities, not dependencies: search and extraction sit
//!   behind narrow traits and the pipeline never sees an API key
//! - Strictly sequential: one query at a time, search then extract, in input
//!   order
//! - A failed row degrades, it never aborts the batch
//! - Library handles mechanics, the front end handles interaction
//!
//! # Usage
//!
//! ```rust,ignore
//! use enrichment::{
//!     batch::{run_batch, BatchConfig},
//!     export,
//!     providers::{GroqExtractionProvider, SerpSearchProvider},
//!     template::{generate_queries, wrap_placeholder},
//!     Table,
//! };
//!
//! let table = Table::from_csv(&std::fs::read("companies.csv")?)?;
//! let values = table.column("company")?;
//!
//! let template = "Find the HQ city of {company}";
//! let queries = generate_queries(template, &wrap_placeholder("company"), &values);
//!
//! let search = SerpSearchProvider::new(serp_api_key);
//! let extract = GroqExtractionProvider::new(groq_api_key);
//!
//! let results = run_batch(&queries, &search, &extract, &BatchConfig::new(template)).await;
//! std::fs::write("extracted_information.csv", export::to_csv(&results)?)?;
//! ```
//!
//! # Modules
//!
//! - [`table`] - in-memory tables built from CSV bytes or fetched ranges
//! - [`sources`] - network-backed tabular sources (Google Sheets)
//! - [`template`] - query generation by placeholder substitution
//! - [`traits`] - provider trait abstractions
//! - [`providers`] - SerpAPI search and Groq extraction implementations
//! - [`prompts`] - extraction prompt construction
//! - [`batch`] - the sequential batch runner
//! - [`export`] - CSV serialization of results
//! - [`testing`] - mock providers for tests

pub mod batch;
pub mod error;
pub mod export;
pub mod prompts;
pub mod providers;
pub mod sources;
pub mod table;
pub mod template;
pub mod testing;
pub mod traits;

// Re-export core types at crate root
pub use batch::{
    run_batch, BatchConfig, FailureMode, ResultRow, ResultTable, NO_RESULTS_MESSAGE,
    PROCESSING_ERROR_MESSAGE,
};
pub use error::{EnrichmentError, Result};
pub use sources::SheetSource;
pub use table::{Row, Table};
pub use template::{generate_queries, wrap_placeholder};
pub use traits::{ExtractionProvider, SearchProvider, SearchRecord};

// Re-export concrete providers
pub use providers::{GroqExtractionProvider, SerpSearchProvider};
