//! Concrete provider implementations backed by external services.

pub mod groq;
pub mod serp;

pub use groq::GroqExtractionProvider;
pub use serp::SerpSearchProvider;
