//! Single-page fetching.
//!
//! [`ContentFetcher`] downloads one URL with the browser User-Agent and the
//! per-request timeout, then hands the body to [`crate::content`] for
//! paragraph extraction and the quality floor.

use crate::config::FetchConfig;
use crate::content;
use crate::error::SearchError;
use crate::http;
use reqwest::StatusCode;

/// Fetches a page and returns its readable text.
///
/// The orchestrator is generic over this trait so that tests can control
/// latency and failures without a network.
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return extracted content.
    ///
    /// # Errors
    ///
    /// Any [`SearchError`]; the orchestrator logs it and drops the URL.
    fn fetch(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, SearchError>> + Send;
}

/// HTTP page fetcher with paragraph extraction.
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    client: reqwest::Client,
    min_content_chars: usize,
}

impl ContentFetcher {
    /// Create a fetcher from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid config or
    /// [`SearchError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &FetchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_page_client(config)?,
            min_content_chars: config.min_content_chars,
        })
    }

    /// The minimum extracted length this fetcher accepts.
    pub fn min_content_chars(&self) -> usize {
        self.min_content_chars
    }
}

impl PageFetcher for ContentFetcher {
    async fn fetch(&self, url: &str) -> Result<String, SearchError> {
        tracing::trace!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Network(format!("failed to fetch {url}: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SearchError::HttpStatus {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(|e| {
            if is_transport_failure(&e) {
                SearchError::Network(format!("failed to read body of {url}: {e}"))
            } else {
                SearchError::Parse(format!("failed to decode HTML body of {url}: {e}"))
            }
        })?;

        tracing::trace!(url, bytes = html.len(), "page received");

        content::extract_content(&html, url, self.min_content_chars)
    }
}

/// True when a body read failed in transport rather than in decoding.
///
/// reqwest wraps stream errors (including the request timeout firing mid-body)
/// in a decode error, so the source chain is searched for the body error.
fn is_transport_failure(error: &reqwest::Error) -> bool {
    if error.is_timeout() || error.is_body() {
        return true;
    }
    let mut source = std::error::Error::source(error);
    while let Some(err) = source {
        if err
            .downcast_ref::<reqwest::Error>()
            .is_some_and(reqwest::Error::is_body)
        {
            return true;
        }
        source = err.source();
    }
    false
}
