//! OpenAI chat-completions summarizer.
//!
//! Sends one non-streaming request to `/v1/chat/completions` with a fixed
//! system instruction and the collated text as the user message, then
//! returns the first choice's content verbatim.
//!
//! # Examples
//!
//! ```rust,no_run
//! use briefer::summarize::{OpenAiSummarizer, Summarizer, SummarizerConfig};
//!
//! # async fn example() -> Result<(), briefer::summarize::SummarizeError> {
//! let config = SummarizerConfig::new("sk-...");
//! let summarizer = OpenAiSummarizer::new(config)?;
//! let summary = summarizer.summarize("Rust and Go are both ...").await?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use super::error::SummarizeError;
use super::provider::Summarizer;

// ── Configuration ─────────────────────────────────────────────

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Path of the chat-completions endpoint below the base URL.
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Configuration for the summarizer.
///
/// Model, token ceiling, temperature and word target are fixed for the
/// lifetime of the process; they are not tunable per call.
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizerConfig {
    /// API key sent as a bearer token.
    pub api_key: Option<String>,
    /// Base URL (defaults to `https://api.openai.com`).
    pub base_url: String,
    /// The model to use.
    pub model: String,
    /// Completion token ceiling.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Word count named in the system instruction.
    pub word_target: u32,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            max_tokens: 150,
            temperature: 0.7,
            word_target: 100,
        }
    }
}

impl SummarizerConfig {
    /// Create a default config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the completion token limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the word count named in the system instruction.
    pub fn with_word_target(mut self, word_target: u32) -> Self {
        self.word_target = word_target;
        self
    }

    /// The API key, if present and not blank.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::ConfigError`] when the key is missing.
    pub fn api_key(&self) -> Result<&str, SummarizeError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| SummarizeError::ConfigError("LLM API key is not set".into()))
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::ConfigError`] describing the first problem.
    pub fn validate(&self) -> Result<(), SummarizeError> {
        self.api_key()?;
        if self.base_url.trim().is_empty() {
            return Err(SummarizeError::ConfigError("base_url must not be empty".into()));
        }
        if self.model.trim().is_empty() {
            return Err(SummarizeError::ConfigError("model must not be empty".into()));
        }
        if self.max_tokens == 0 {
            return Err(SummarizeError::ConfigError(
                "max_tokens must be greater than 0".into(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(SummarizeError::ConfigError(
                "temperature must be within 0.0..=2.0".into(),
            ));
        }
        Ok(())
    }

    /// Full chat-completions URL.
    pub fn endpoint(&self) -> String {
        format!("{}{COMPLETIONS_PATH}", self.base_url.trim_end_matches('/'))
    }

    /// The fixed system instruction.
    pub fn system_instruction(&self) -> String {
        format!(
            "You are a helpful assistant that summarizes content into {} words or fewer.",
            self.word_target
        )
    }
}

// ── Wire types ────────────────────────────────────────────────

/// Chat-completions request body.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Build the request body for summarizing `text`.
pub fn build_request<'a>(config: &'a SummarizerConfig, text: &str) -> ChatRequest<'a> {
    ChatRequest {
        model: &config.model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: config.system_instruction(),
            },
            ChatMessage {
                role: "user",
                content: format!("Please summarize the following content:\n\n{text}"),
            },
        ],
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    }
}

/// Decode a success body and return the first choice's text.
///
/// # Errors
///
/// Returns [`SummarizeError::DecodeError`] for an unexpected shape and
/// [`SummarizeError::EmptyResponse`] when there are no choices.
pub fn parse_completion(body: &str) -> Result<String, SummarizeError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| SummarizeError::DecodeError(format!("failed to parse response: {e}")))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or(SummarizeError::EmptyResponse)
}

/// Extract an error message from an error response body.
///
/// Prefers `error.message`; falls back to the whole body.
fn extract_error_details(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

// ── Client ────────────────────────────────────────────────────

/// Chat-completions summarizer.
#[derive(Debug, Clone)]
pub struct OpenAiSummarizer {
    config: SummarizerConfig,
    client: reqwest::Client,
}

impl OpenAiSummarizer {
    /// Create a summarizer from `config`.
    ///
    /// The API key is checked on each call, not here.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::NetworkError`] if the HTTP client cannot be built.
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            SummarizeError::NetworkError(format!("failed to build HTTP client: {e}"))
        })?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    fn name(&self) -> &str {
        "openai"
    }

    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let api_key = self.config.api_key()?;
        let body = build_request(&self.config, text);

        tracing::debug!(
            model = %self.config.model,
            chars = text.chars().count(),
            "requesting summary"
        );

        let response = self
            .client
            .post(self.config.endpoint())
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizeError::NetworkError(format!("failed to send request: {e}")))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| SummarizeError::NetworkError(format!("failed to read response: {e}")))?;

        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "LLM API returned an error");
            return Err(SummarizeError::ApiError {
                status: status.as_u16(),
                details: extract_error_details(&body_text),
            });
        }

        let summary = parse_completion(&body_text)?;
        tracing::debug!(chars = summary.chars().count(), "summary received");
        Ok(summary)
    }
}
