//! Briefer: command-line research assistant.
//!
//! This crate turns a search query into a short summary:
//! Query → Search API → (optional page fetch) → Collate → LLM → Summary
//!
//! # Architecture
//!
//! - **Search**: Google Custom Search JSON API via `briefer-search`
//! - **Page fetch**: bounded concurrent fan-out with cancellation and a deadline
//! - **Collate**: snippets or page contents joined into one text block
//! - **Summarize**: OpenAI-compatible chat completions endpoint
//!
//! Configuration is read once into an [`AppConfig`] and passed explicitly
//! to each client. No stage reads the environment on its own.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod summarize;

pub use config::{AppConfig, SourceMode};
pub use error::{ResearchError, Result};
pub use pipeline::{DefaultResearcher, ResearchReport, Researcher};
pub use summarize::{OpenAiSummarizer, SummarizeError, Summarizer, SummarizerConfig};

pub use briefer_search::{FetchContext, FetchOptions, SearchResult};
