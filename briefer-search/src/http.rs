//! Shared HTTP client construction.
//!
//! The search API gets a plain client with transport defaults. Page fetches
//! get a client with the fixed browser User-Agent and a per-request timeout.

use crate::config::FetchConfig;
use crate::error::SearchError;
use std::time::Duration;

/// Build the [`reqwest::Client`] used for search API calls.
///
/// No timeout override: the search call relies on transport defaults.
///
/// # Errors
///
/// Returns [`SearchError::Network`] if the client cannot be constructed.
pub fn build_api_client() -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| SearchError::Network(format!("failed to build HTTP client: {e}")))
}

/// Build the [`reqwest::Client`] used for page fetches.
///
/// The client has:
/// - Timeout from config
/// - The configured browser User-Agent
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid config, or
/// [`SearchError::Network`] if the client cannot be constructed.
pub fn build_page_client(config: &FetchConfig) -> Result<reqwest::Client, SearchError> {
    config.validate()?;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Network(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_api_client_succeeds() {
        assert!(build_api_client().is_ok());
    }

    #[test]
    fn build_page_client_with_default_config() {
        let config = FetchConfig::default();
        assert!(build_page_client(&config).is_ok());
    }

    #[test]
    fn build_page_client_rejects_zero_timeout() {
        let config = FetchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = build_page_client(&config).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }
}
