use crate::generator::{GenerationResult, TextGenerator};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Configuration for the chat-completions provider. Works against any
/// OpenAI-compatible endpoint (hosted or local).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL for the API (e.g., "https://api.openai.com/v1")
    pub base_url: String,
    /// Model to use
    pub model: String,
    /// Optional API key (local endpoints usually don't need one)
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum retries for failed requests
    pub max_retries: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate per completion
    pub max_tokens: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: std::env::var("CONCEPTGRAPH_API_KEY").ok(),
            timeout_secs: 60,
            max_retries: 3,
            temperature: 0.2,
            max_tokens: 2048,
        }
    }
}

impl CompletionConfig {
    /// Create config for a custom endpoint
    pub fn custom(base_url: String, model: String) -> Self {
        Self {
            base_url,
            model,
            ..Default::default()
        }
    }
}

/// HTTP text-generation client with bounded retry. This is the one shared
/// resource of a pipeline run; all retry/backoff lives here, never in the
/// pipeline layer.
pub struct CompletionClient {
    config: CompletionConfig,
    client: Client,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(CompletionConfig::default())
    }

    /// Send a request with retry logic
    async fn send_request(&self, prompt: &str) -> Result<ChatResponse> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = Duration::from_secs(2u64.pow(attempt - 1));
                tokio::time::sleep(delay).await;
            }

            match self.try_request(prompt).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.config.max_retries {
                        tracing::warn!(
                            "generation request failed (attempt {}/{}), retrying...",
                            attempt + 1,
                            self.config.max_retries + 1
                        );
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("All retry attempts failed")))
    }

    /// Try a single chat-completions request
    async fn try_request(&self, prompt: &str) -> Result<ChatResponse> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let mut builder = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("content-type", "application/json");

        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .json(&request)
            .send()
            .await
            .context("Failed to send generation request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!("generation API error ({}): {}", status, error_text));
        }

        response
            .json::<ChatResponse>()
            .await
            .context("Failed to parse generation API response")
    }
}

#[async_trait]
impl TextGenerator for CompletionClient {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let response = self.send_request(prompt).await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| anyhow!("generation API returned no choices"))
    }
}

// Chat-completions API request/response types

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
