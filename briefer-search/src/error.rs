//! Error types for the briefer-search crate.
//!
//! One taxonomy covers the search call and page fetches. Search errors
//! abort a run; fetch errors are absorbed by the orchestrator. No API keys
//! appear in error messages.

/// Errors that can occur while searching or fetching page content.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Missing credentials, invalid endpoint, or invalid option.
    #[error("config error: {0}")]
    Config(String),

    /// Transport-level failure, including request timeouts.
    #[error("network error: {0}")]
    Network(String),

    /// The search API body did not match the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// A fetched page answered with something other than `200 OK`.
    #[error("HTTP status {status} from {url}")]
    HttpStatus {
        /// The requested URL.
        url: String,
        /// The status code returned.
        status: u16,
    },

    /// A fetched body could not be read as HTML text.
    #[error("parse error: {0}")]
    Parse(String),

    /// No paragraph text could be extracted from the page.
    #[error("no meaningful content found at {0}")]
    EmptyContent(String),

    /// Paragraph text exists but is below the quality floor.
    #[error("content too short at {url}: {chars} chars (minimum {min})")]
    TooShort {
        /// The requested URL.
        url: String,
        /// Extracted length in characters.
        chars: usize,
        /// The configured floor.
        min: usize,
    },

    /// The fetch was cancelled through its [`FetchContext`](crate::orchestrator::FetchContext).
    #[error("fetch cancelled: {0}")]
    Cancelled(String),

    /// The fetch was still running when the context deadline passed.
    #[error("fetch deadline exceeded: {0}")]
    DeadlineExceeded(String),
}

impl SearchError {
    /// True for rejections where the transport succeeded but the page had
    /// too little text to be useful.
    pub fn is_content_quality(&self) -> bool {
        matches!(self, Self::EmptyContent(_) | Self::TooShort { .. })
    }
}

/// Convenience type alias for briefer-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
