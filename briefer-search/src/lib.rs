//! # briefer-search
//!
//! Search, page fetching and collation for briefer.
//!
//! ## Design
//!
//! - Queries a search API (Google Custom Search JSON API) with a single GET
//! - Fetches result pages with a browser User-Agent and a per-request timeout
//! - Extracts paragraph text and rejects pages below a quality floor
//! - Fans page fetches out over a bounded pool, with cancellation and a
//!   deadline shared by every task
//! - Graceful degradation: failed pages are logged and omitted
//!
//! ## Security
//!
//! - API keys are passed in by the caller, never read from the environment
//! - Transport errors from the search API are stripped of the request URL
//! - Search queries are logged only at trace level

pub mod collate;
pub mod config;
pub mod content;
pub mod engine;
pub mod engines;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod orchestrator;
pub mod types;

pub use collate::{collate, collate_texts};
pub use config::{FetchConfig, SearchConfig};
pub use engine::SearchBackend;
pub use engines::GoogleSearch;
pub use error::{Result, SearchError};
pub use fetcher::{ContentFetcher, PageFetcher};
pub use orchestrator::{fetch_all, fetch_outcomes, FetchContext, FetchOptions};
pub use types::{FetchOutcome, SearchResult};

/// Search with the Google backend using `config`.
///
/// Convenience wrapper that builds a one-off [`GoogleSearch`].
///
/// # Errors
///
/// Returns [`SearchError::Config`] when credentials are missing,
/// [`SearchError::Network`] on transport failure, or
/// [`SearchError::Decode`] when the body has an unexpected shape.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> briefer_search::Result<()> {
/// let config = briefer_search::SearchConfig::new("api-key", "engine-id");
/// let results = briefer_search::search("rust programming", &config).await?;
/// for result in &results {
///     println!("{}: {}", result.title, result.link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<Vec<SearchResult>> {
    GoogleSearch::new(config.clone())?.search(query).await
}

/// Fetch and extract paragraph text from a single page.
///
/// Convenience wrapper that builds a one-off [`ContentFetcher`].
///
/// # Errors
///
/// Any [`SearchError`] produced by [`ContentFetcher`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> briefer_search::Result<()> {
/// let config = briefer_search::FetchConfig::default();
/// let text = briefer_search::fetch_page_content("https://example.com", &config).await?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
pub async fn fetch_page_content(url: &str, config: &FetchConfig) -> Result<String> {
    ContentFetcher::new(config)?.fetch(url).await
}
