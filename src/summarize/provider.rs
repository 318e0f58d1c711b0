//! Summarizer trait for LLM backends.

use async_trait::async_trait;

use super::error::SummarizeError;

/// Turns collated research text into a short summary.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Returns the backend name (e.g. `"openai"`).
    fn name(&self) -> &str;

    /// Summarize `text`.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::ConfigError`] before any network I/O when
    /// the backend is not configured; otherwise transport, API, decode or
    /// empty-response errors.
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}
