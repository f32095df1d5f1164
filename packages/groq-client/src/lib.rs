//! Pure Groq REST API client.
//!
//! A clean, minimal client for Groq's OpenAI-compatible chat-completions
//! endpoint. No domain-specific logic, no streaming: one request, one fully
//! assembled completion.
//!
//! # Example
//!
//! ```rust,ignore
//! use groq_client::{ChatRequest, GroqClient, Message};
//!
//! let client = GroqClient::from_env()?;
//!
//! let response = client
//!     .chat_completion(
//!         ChatRequest::new("llama3-8b-8192")
//!             .message(Message::system("You are a helpful assistant."))
//!             .message(Message::user("Hello!"))
//!             .temperature(0.5),
//!     )
//!     .await?;
//!
//! println!("{}", response.text().unwrap_or(""));
//! ```

pub mod error;
pub mod types;

pub use error::{GroqError, Result};
pub use types::*;

use std::fmt;

/// Pure Groq API client.
#[derive(Clone)]
pub struct GroqClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    /// Create a new Groq client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
        }
    }

    /// Create from environment variable `GROQ_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| GroqError::Config("GROQ_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, compatible gateways).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a chat completion request.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let resp = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GroqError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let response: ChatResponse = resp.json().await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Chat completion finished"
            );
        }

        Ok(response)
    }

    /// Send a chat completion request and return the first choice's content.
    ///
    /// Errors with [`GroqError::EmptyCompletion`] if the API returned no
    /// choices or a choice without content.
    pub async fn complete_text(&self, request: ChatRequest) -> Result<String> {
        let response = self.chat_completion(request).await?;
        response
            .text()
            .map(|s| s.to_string())
            .ok_or(GroqError::EmptyCompletion)
    }
}

impl fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_set_fields_only() {
        let request = ChatRequest::new("llama3-8b-8192")
            .message(Message::system("You are a helpful assistant."))
            .message(Message::user("Hi"))
            .temperature(0.5)
            .max_tokens(150)
            .top_p(1.0);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3-8b-8192");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["max_tokens"], 150);
        assert_eq!(json["stream"], false);
        assert!(json.get("stop").is_none());
    }

    #[test]
    fn chat_response_text_returns_first_choice() {
        let json = r#"{
            "id": "chatcmpl-123",
            "model": "llama3-8b-8192",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "  New York  "},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 50, "completion_tokens": 4, "total_tokens": 54}
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("  New York  "));
    }

    #[test]
    fn chat_response_text_handles_no_choices() {
        let json = r#"{"id": null, "model": null, "choices": [], "usage": null}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn debug_redacts_api_key() {
        let client = GroqClient::new("gsk_secret");
        assert!(!format!("{:?}", client).contains("gsk_secret"));
    }
}
