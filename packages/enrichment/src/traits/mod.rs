//! Provider trait abstractions.
//!
//! The pipeline only ever talks to its external capabilities through these
//! two traits, so any search backend or language model can be swapped in,
//! including the mocks in [`crate::testing`].

pub mod extractor;
pub mod searcher;

pub use extractor::ExtractionProvider;
pub use searcher::{SearchProvider, SearchRecord};
