//! Search and fetch configuration with sensible defaults.
//!
//! [`SearchConfig`] carries the search API endpoint and credentials.
//! [`FetchConfig`] controls page fetch timeouts, the content quality floor
//! and how many fetches may run at once. Neither reads the environment;
//! callers build them and pass them into client constructors.

use crate::error::SearchError;

/// Google Custom Search JSON API endpoint.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Browser identification sent with page fetches. Some servers reject
/// requests carrying a library default User-Agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for the search API client.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Full URL of the search endpoint (no query string).
    pub endpoint: String,
    /// API key forwarded as the `key` query parameter.
    pub api_key: Option<String>,
    /// Search engine / collection identifier forwarded as `cx`.
    pub engine_id: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_owned(),
            api_key: None,
            engine_id: None,
        }
    }
}

impl SearchConfig {
    /// Create a config for the default endpoint with the given credentials.
    pub fn new(api_key: impl Into<String>, engine_id: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            engine_id: Some(engine_id.into()),
            ..Default::default()
        }
    }

    /// Point the client at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Validates this configuration and returns the credentials pair.
    ///
    /// Blank values count as missing.
    pub fn credentials(&self) -> Result<(&str, &str), SearchError> {
        let api_key = non_blank(self.api_key.as_deref())
            .ok_or_else(|| SearchError::Config("search API key is not set".into()))?;
        let engine_id = non_blank(self.engine_id.as_deref())
            .ok_or_else(|| SearchError::Config("search engine ID is not set".into()))?;
        Ok((api_key, engine_id))
    }

    /// Validates this configuration, returning an error if any field is invalid.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.endpoint.trim().is_empty() {
            return Err(SearchError::Config("search endpoint must not be empty".into()));
        }
        self.credentials().map(|_| ())
    }
}

/// Configuration for page fetching and the fan-out over result URLs.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Pages with fewer extracted characters than this are rejected.
    pub min_content_chars: usize,
    /// User-Agent header sent with every page request.
    pub user_agent: String,
    /// Upper bound on fetches in flight at once.
    pub max_concurrency: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            min_content_chars: 100,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_concurrency: 8,
        }
    }
}

impl FetchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `user_agent` must not be blank
    ///
    /// A `max_concurrency` of 0 is accepted and treated as 1 by the orchestrator.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(SearchError::Config("user_agent must not be empty".into()));
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
