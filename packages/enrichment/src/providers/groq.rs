//! Groq-backed extraction provider.

use async_trait::async_trait;
use groq_client::{ChatRequest, GroqClient, Message};

use crate::error::{EnrichmentError, Result};
use crate::prompts::{format_extract_prompt, SYSTEM_PROMPT};
use crate::traits::{ExtractionProvider, SearchRecord};

/// Default extraction model.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Extraction provider backed by Groq chat completions.
///
/// Sends one blocking completion request per query and returns the trimmed
/// completion text.
#[derive(Debug)]
pub struct GroqExtractionProvider {
    client: GroqClient,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqExtractionProvider {
    /// Create a new provider with the given API key and default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(GroqClient::new(api_key))
    }

    /// Wrap an already-configured client.
    pub fn with_client(client: GroqClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.5,
            max_tokens: 150,
        }
    }

    /// Use a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl ExtractionProvider for GroqExtractionProvider {
    async fn extract(
        &self,
        query: &str,
        records: &[SearchRecord],
        instruction: &str,
    ) -> Result<String> {
        let prompt = format_extract_prompt(instruction, records);

        let request = ChatRequest::new(&self.model)
            .message(Message::system(SYSTEM_PROMPT))
            .message(Message::user(prompt))
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .top_p(1.0);

        let text = self
            .client
            .complete_text(request)
            .await
            .map_err(|e| EnrichmentError::Provider(Box::new(e)))?;

        tracing::debug!(query, chars = text.len(), "Extraction complete");
        Ok(text.trim().to_string())
    }
}
