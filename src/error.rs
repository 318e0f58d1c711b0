//! Error types for the research pipeline.

use briefer_search::SearchError;

use crate::summarize::SummarizeError;

/// Top-level error type for a research run.
#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    /// The search call failed; aborts the run.
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    /// The summarizer call failed; aborts the run.
    #[error("summarize failed: {0}")]
    Summarize(#[from] SummarizeError),

    /// Configuration could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The query was empty after trimming.
    #[error("search query must not be empty")]
    EmptyQuery,

    /// The run was cancelled before it finished.
    #[error("research cancelled")]
    Cancelled,

    /// I/O error reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ResearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_errors_convert() {
        let err: ResearchError = SearchError::Network("refused".into()).into();
        assert!(matches!(err, ResearchError::Search(_)));
        assert_eq!(err.to_string(), "search failed: network error: refused");
    }

    #[test]
    fn summarize_errors_convert() {
        let err: ResearchError = SummarizeError::EmptyResponse.into();
        assert_eq!(
            err.to_string(),
            "summarize failed: [EMPTY_RESPONSE] no content in response"
        );
    }

    #[test]
    fn display_empty_query() {
        assert_eq!(
            ResearchError::EmptyQuery.to_string(),
            "search query must not be empty"
        );
    }

    #[test]
    fn display_cancelled() {
        assert_eq!(ResearchError::Cancelled.to_string(), "research cancelled");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResearchError>();
    }
}
