//! Core types for search results and per-URL fetch outcomes.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// A single search result, in the order the search API ranked it.
///
/// Fields missing from an API item decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page.
    #[serde(default)]
    pub title: String,
    /// The URL of the result page.
    #[serde(default)]
    pub link: String,
    /// A short text excerpt chosen by the search API.
    #[serde(default)]
    pub snippet: String,
}

/// Wire shape of a search API response.
///
/// An absent `items` key means zero results, not a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Results in relevance order.
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

/// The result of fetching one URL inside the orchestrator.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The page was fetched and passed the content checks.
    Fetched {
        /// The requested URL.
        url: String,
        /// Extracted paragraph text.
        content: String,
    },
    /// The fetch failed or the content was rejected.
    Failed {
        /// The requested URL.
        url: String,
        /// Why the URL was dropped.
        error: SearchError,
    },
}

impl FetchOutcome {
    /// The URL this outcome belongs to.
    pub fn url(&self) -> &str {
        match self {
            Self::Fetched { url, .. } | Self::Failed { url, .. } => url,
        }
    }

    /// The extracted content, if the fetch succeeded.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Fetched { content, .. } => Some(content),
            Self::Failed { .. } => None,
        }
    }

    /// Whether the fetch succeeded.
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }
}
