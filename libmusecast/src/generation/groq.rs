//! Groq chat completion client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GenerationError, Result};
use crate::generation::TextGenerator;
use crate::types::GenerationRequest;

/// Default base URL for the Groq OpenAI-compatible API.
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Client for the Groq chat completion endpoint.
#[derive(Debug, Clone)]
pub struct GroqClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: GROQ_API_BASE.to_string(),
        }
    }

    /// Override the base URL, for tests against a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl TextGenerator for GroqClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let body = ChatCompletionRequest {
            model: request.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: request.prompt.clone(),
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            top_p: request.top_p,
        };

        let start = std::time::Instant::now();
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Groq request failed");
                GenerationError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Groq API returned error");
            return Err(GenerationError::Api(format!(
                "Groq API error ({}): {}",
                status, error_text
            ))
            .into());
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Parse(e.to_string()))?;

        // A missing or null message content is treated as an empty result,
        // not an error; the caller decides whether that is fatal.
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        debug!(
            model = %request.model,
            chars = content.chars().count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Groq chat completion finished"
        );

        Ok(content)
    }

    fn name(&self) -> &str {
        "groq"
    }
}
