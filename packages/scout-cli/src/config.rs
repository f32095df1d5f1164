use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Provider credentials loaded from environment variables.
///
/// The Google Sheets key is read separately by the input loader since it is
/// only needed for sheet input (and is needed even for a dry run).
#[derive(Clone)]
pub struct Config {
    pub serp_api_key: String,
    pub groq_api_key: String,
    pub groq_model: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            serp_api_key: env::var("SERP_API_KEY").context("SERP_API_KEY must be set")?,
            groq_api_key: env::var("GROQ_API_KEY").context("GROQ_API_KEY must be set")?,
            groq_model: env::var("GROQ_MODEL").ok(),
        })
    }
}
