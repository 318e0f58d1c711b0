//! LLM summarization of collated research text.
//!
//! [`Summarizer`] is the seam the pipeline depends on; [`OpenAiSummarizer`]
//! is the chat-completions implementation.

pub mod error;
pub mod openai;
pub mod provider;

pub use error::SummarizeError;
pub use openai::{OpenAiSummarizer, SummarizerConfig};
pub use provider::Summarizer;
