//! Google Custom Search JSON API backend.
//!
//! One GET per query against `{endpoint}?key=..&cx=..&q=..`. The response
//! status is only logged. Whatever JSON comes back is decoded
//! against the expected shape, and an absent `items` key means no results.

use crate::config::SearchConfig;
use crate::engine::SearchBackend;
use crate::error::SearchError;
use crate::http;
use crate::types::{SearchResponse, SearchResult};
use url::Url;

/// Google Custom Search client.
#[derive(Debug, Clone)]
pub struct GoogleSearch {
    config: SearchConfig,
    client: reqwest::Client,
}

impl GoogleSearch {
    /// Create a client from `config`.
    ///
    /// Credentials are checked on each call, not here.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Network`] if the HTTP client cannot be built.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            config,
            client: http::build_api_client()?,
        })
    }
}

impl SearchBackend for GoogleSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let (api_key, engine_id) = self.config.credentials()?;
        let url = build_search_url(&self.config.endpoint, api_key, engine_id, query)?;

        tracing::trace!(query, "Google search");

        // `without_url` keeps the API key out of error text.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Network(format!("search request failed: {}", e.without_url())))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SearchError::Network(format!("search response read failed: {}", e.without_url()))
        })?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "search API answered with non-success status");
        }

        let results = parse_search_response(&body)?;
        tracing::debug!(count = results.len(), "search returned results");
        Ok(results)
    }

    fn name(&self) -> &'static str {
        "Google"
    }
}

/// Build the request URL with the query form-encoded.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `endpoint` is not a valid URL.
pub fn build_search_url(
    endpoint: &str,
    api_key: &str,
    engine_id: &str,
    query: &str,
) -> Result<Url, SearchError> {
    Url::parse_with_params(endpoint, &[("key", api_key), ("cx", engine_id), ("q", query)])
        .map_err(|e| SearchError::Config(format!("invalid search endpoint {endpoint}: {e}")))
}

/// Decode a search API body into results.
///
/// Extracted as a separate function for testability with canned JSON.
pub(crate) fn parse_search_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    serde_json::from_str::<SearchResponse>(body)
        .map(|response| response.items)
        .map_err(|e| SearchError::Decode(format!("failed to parse search response: {e}")))
}
