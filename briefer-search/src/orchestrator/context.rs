//! Cancellation and deadline shared by every fetch task.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::SearchError;

/// Context threaded into every fetch task.
///
/// Cloning is cheap; clones share the same cancellation token.
#[derive(Debug, Clone)]
pub struct FetchContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for FetchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchContext {
    /// A context with a fresh token and no deadline.
    pub fn new() -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    /// Use an existing token, e.g. one wired to Ctrl+C.
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Set an absolute deadline for all tasks.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set a deadline `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// The token tasks watch for cancellation.
    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel every task sharing this context.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Whether the deadline has passed.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Drive `fut` for `url` unless the context is cancelled or expires first.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Cancelled`] or [`SearchError::DeadlineExceeded`]
    /// when the context stops the task, otherwise whatever `fut` returns.
    pub async fn run<T, F>(&self, url: &str, fut: F) -> Result<T, SearchError>
    where
        F: Future<Output = Result<T, SearchError>>,
    {
        if self.is_cancelled() {
            return Err(SearchError::Cancelled(url.to_owned()));
        }
        if self.is_expired() {
            return Err(SearchError::DeadlineExceeded(url.to_owned()));
        }

        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, fut)
                    .await
                    .unwrap_or_else(|_| Err(SearchError::DeadlineExceeded(url.to_owned()))),
                None => fut.await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(SearchError::Cancelled(url.to_owned())),
            result = bounded => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_is_live() {
        let ctx = FetchContext::new();
        assert!(!ctx.is_cancelled());
        assert!(!ctx.is_expired());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn clones_share_cancellation() {
        let ctx = FetchContext::new();
        let clone = ctx.clone();
        clone.cancel();
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn external_token_is_used() {
        let token = CancellationToken::new();
        let ctx = FetchContext::new().with_cancel_token(token.clone());
        token.cancel();
        assert!(ctx.is_cancelled());
        assert!(ctx.cancel_token().is_cancelled());
    }

    #[tokio::test]
    async fn run_passes_through_result() {
        let ctx = FetchContext::new();
        let out = ctx.run("u", async { Ok::<_, SearchError>(7) }).await;
        assert_eq!(out.expect("ok"), 7);

        let err = ctx
            .run("u", async { Err::<(), _>(SearchError::Network("x".into())) })
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Network(_)));
    }

    #[tokio::test]
    async fn run_on_cancelled_context_skips_future() {
        let ctx = FetchContext::new();
        ctx.cancel();
        let err = ctx
            .run("https://a.example", async {
                Err::<(), _>(SearchError::Network("polled".into()))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Cancelled(ref u) if u == "https://a.example"));
    }

    #[tokio::test]
    async fn run_stops_at_deadline() {
        let ctx = FetchContext::new().with_timeout(Duration::from_millis(20));
        let err = ctx
            .run("slow", async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<(), SearchError>(())
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::DeadlineExceeded(_)));
    }

    #[tokio::test]
    async fn run_stops_on_cancel_mid_flight() {
        let ctx = FetchContext::new();
        let trigger = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });
        let err = ctx
            .run("slow", async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<(), SearchError>(())
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Cancelled(_)));
    }
}
