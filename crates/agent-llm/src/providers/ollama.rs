//! Ollama provider implementation
//!
//! Talks to a local or remote Ollama server through its native chat endpoint.
//! See: https://github.com/ollama/ollama/blob/main/docs/api.md#generate-a-chat-completion
//!
//! # Example
//!
//! ```no_run
//! use agent_llm::{CompletionRequest, LLMProvider, Message};
//! use agent_llm::providers::{OllamaConfig, OllamaProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = OllamaConfig::new("http://localhost:11434").with_timeout(30);
//!     let provider = OllamaProvider::with_config(config)?;
//!
//!     let request = CompletionRequest::builder("llama3.2")
//!         .add_message(Message::user("Summarize today's market in one line."))
//!         .max_tokens(100)
//!         .build();
//!
//!     let response = provider.complete(request).await?;
//!     println!("{}", response.text());
//!     Ok(())
//! }
//! ```

use crate::{
    CompletionRequest, CompletionResponse, LLMError, LLMProvider, Message, Result, Role,
    StopReason, TokenUsage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default address of a locally running Ollama server
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the Ollama provider
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Server base URL (default: "http://localhost:11434")
    pub base_url: String,

    /// Request timeout in seconds (default: 120)
    pub timeout_secs: u64,
}

impl OllamaConfig {
    /// Create a config pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OLLAMA_BASE_URL)
    }
}

/// Ollama provider
///
/// Works with any model pulled on the server (llama3.2, mistral, ...).
/// Construction never touches the network; an unreachable server shows up
/// as an [`LLMError::HttpError`] from [`complete`](LLMProvider::complete).
pub struct OllamaProvider {
    client: Client,
    config: OllamaConfig,
}

impl OllamaProvider {
    /// Create a provider with custom configuration
    pub fn with_config(config: OllamaConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(LLMError::ConfigurationError(
                "Ollama base URL must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a provider for `base_url` with default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(OllamaConfig::new(base_url))
    }

    /// Get the current configuration
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    #[instrument(skip(self, request), fields(model = %request.model, base_url = %self.config.base_url))]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let model = request.model.clone();
        let body = build_ollama_request(request);

        debug!("Sending chat request to Ollama");
        let response = self.client.post(self.chat_url()).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                404 => LLMError::ModelNotFound(model),
                400 => LLMError::InvalidRequest(error_text),
                _ => LLMError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        let raw: Value = response.json().await.map_err(|e| {
            LLMError::UnexpectedResponse(format!("Failed to parse response: {e}"))
        })?;

        parse_ollama_response(raw)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

// Ollama-specific request types

#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    num_predict: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// The system prompt travels as the first chat message
fn build_ollama_request(request: CompletionRequest) -> OllamaRequest {
    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    if let Some(system) = request.system {
        messages.push(Message::system(system));
    }
    messages.extend(request.messages);

    OllamaRequest {
        model: request.model,
        messages,
        stream: false,
        options: OllamaOptions {
            num_predict: request.max_tokens,
            temperature: request.temperature,
        },
    }
}

fn parse_ollama_response(raw: Value) -> Result<CompletionResponse> {
    if let Some(error) = raw.get("error").and_then(Value::as_str) {
        return Err(LLMError::UnexpectedResponse(error.to_string()));
    }

    let content = raw
        .pointer("/message/content")
        .or_else(|| raw.get("response"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let stop_reason = match raw.get("done_reason").and_then(Value::as_str) {
        Some("length") => StopReason::MaxTokens,
        _ => StopReason::EndTurn,
    };

    let usage = match (
        raw.get("prompt_eval_count").and_then(Value::as_u64),
        raw.get("eval_count").and_then(Value::as_u64),
    ) {
        (Some(input), Some(output)) => Some(TokenUsage {
            input_tokens: input as usize,
            output_tokens: output as usize,
        }),
        _ => None,
    };

    debug!(
        "Received response - stop_reason: {:?}, tokens: {:?}",
        stop_reason, usage
    );

    Ok(CompletionResponse {
        message: Message {
            role: Role::Assistant,
            content,
        },
        stop_reason,
        usage,
        raw,
    })
}
