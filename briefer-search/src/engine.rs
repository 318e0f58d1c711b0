//! Trait definition for search API backends.
//!
//! The pipeline depends on [`SearchBackend`] rather than a concrete client
//! so that tests can substitute canned results.

use crate::error::SearchError;
use crate::types::SearchResult;

/// A web search backend.
///
/// Implementations own their credentials and endpoint. Each handles its own:
///
/// - credential checks before any network I/O
/// - URL construction with query encoding
/// - decoding the response into [`SearchResult`] values
///
/// All implementations must be `Send + Sync`.
pub trait SearchBackend: Send + Sync {
    /// Perform a web search and return results in relevance order.
    ///
    /// An empty result list is a valid, non-error outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] when credentials are missing,
    /// [`SearchError::Network`] on transport failure and
    /// [`SearchError::Decode`] when the body has an unexpected shape.
    fn search(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;

    /// Short human-readable backend name, used in logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A canned backend for testing trait bounds and async execution.
    struct CannedBackend {
        results: Vec<SearchResult>,
        fail: bool,
    }

    impl SearchBackend for CannedBackend {
        async fn search(&self, _query: &str) -> Result<Vec<SearchResult>, SearchError> {
            if self.fail {
                return Err(SearchError::Network("canned failure".into()));
            }
            Ok(self.results.clone())
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    #[test]
    fn canned_backend_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CannedBackend>();
    }

    #[tokio::test]
    async fn canned_backend_returns_results() {
        let backend = CannedBackend {
            results: vec![SearchResult {
                title: "Test".into(),
                link: "https://test.example".into(),
                snippet: "A test result".into(),
            }],
            fail: false,
        };

        let results = backend.search("test").await.expect("should succeed");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Test");
        assert_eq!(backend.name(), "canned");
    }

    #[tokio::test]
    async fn canned_backend_propagates_errors() {
        let backend = CannedBackend {
            results: vec![],
            fail: true,
        };
        let err = backend.search("test").await.unwrap_err();
        assert!(err.to_string().contains("canned failure"));
    }
}
