//! Bounded fan-out over result URLs, fan-in in completion order.
//!
//! Results are appended as tasks finish, not in input order. Callers must
//! not rely on the order of the aggregated text.

use futures::stream::{self, StreamExt};

use crate::collate::collate_texts;
use crate::config::FetchConfig;
use crate::fetcher::PageFetcher;
use crate::types::FetchOutcome;

use super::context::FetchContext;

/// Tuning for a single fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Maximum fetches in flight. Zero is treated as one.
    pub max_concurrency: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&FetchConfig::default())
    }
}

impl From<&FetchConfig> for FetchOptions {
    fn from(config: &FetchConfig) -> Self {
        Self {
            max_concurrency: config.max_concurrency,
        }
    }
}

impl FetchOptions {
    /// Options allowing `max_concurrency` fetches in flight.
    pub fn new(max_concurrency: usize) -> Self {
        Self { max_concurrency }
    }

    /// The effective pool size.
    pub fn limit(&self) -> usize {
        self.max_concurrency.max(1)
    }
}

/// Fetch every URL and return one outcome per URL, in completion order.
///
/// # Pipeline
///
/// 1. Wrap each fetch in [`FetchContext::run`] so cancellation and the
///    deadline apply to every task
/// 2. Drive at most [`FetchOptions::limit`] tasks at once with
///    [`StreamExt::buffer_unordered`]
/// 3. Collect outcomes as tasks finish; return once all have terminated
pub async fn fetch_outcomes<F: PageFetcher>(
    fetcher: &F,
    urls: &[String],
    options: &FetchOptions,
    ctx: &FetchContext,
) -> Vec<FetchOutcome> {
    if urls.is_empty() {
        return Vec::new();
    }

    tracing::debug!(
        count = urls.len(),
        max_concurrency = options.limit(),
        "fetching pages"
    );

    stream::iter(urls)
        .map(move |url| async move {
            match ctx.run(url, fetcher.fetch(url)).await {
                Ok(content) => FetchOutcome::Fetched {
                    url: url.clone(),
                    content,
                },
                Err(error) => FetchOutcome::Failed {
                    url: url.clone(),
                    error,
                },
            }
        })
        .buffer_unordered(options.limit())
        .collect()
        .await
}

/// Fetch every URL and join the successful contents with newlines.
///
/// Never fails: each failure is logged and its URL omitted. When every
/// fetch fails the result is an empty string.
pub async fn fetch_all<F: PageFetcher>(
    fetcher: &F,
    urls: &[String],
    options: &FetchOptions,
    ctx: &FetchContext,
) -> String {
    let outcomes = fetch_outcomes(fetcher, urls, options, ctx).await;

    let mut contents = Vec::with_capacity(outcomes.len());
    let mut failed = 0usize;

    for outcome in outcomes {
        match outcome {
            FetchOutcome::Fetched { url, content } => {
                tracing::debug!(url = %url, chars = content.chars().count(), "page fetched");
                contents.push(content);
            }
            FetchOutcome::Failed { url, error } => {
                failed += 1;
                if error.is_content_quality() {
                    tracing::info!(url = %url, error = %error, "page skipped");
                } else {
                    tracing::warn!(url = %url, error = %error, "page fetch failed");
                }
            }
        }
    }

    tracing::info!(fetched = contents.len(), failed, "page fetch complete");
    collate_texts(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Fetcher with scripted latency and failures. URLs starting with
    /// `fail` error out; everything else returns `content of {url}`.
    #[derive(Default)]
    struct ScriptedFetcher {
        delays_ms: HashMap<String, u64>,
        default_delay_ms: u64,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl ScriptedFetcher {
        fn with_delay(default_delay_ms: u64) -> Self {
            Self {
                default_delay_ms,
                ..Default::default()
            }
        }

        fn slow(mut self, url: &str, delay_ms: u64) -> Self {
            self.delays_ms.insert(url.to_owned(), delay_ms);
            self
        }
    }

    impl PageFetcher for ScriptedFetcher {
        async fn fetch(&self, url: &str) -> Result<String, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);

            let delay = self
                .delays_ms
                .get(url)
                .copied()
                .unwrap_or(self.default_delay_ms);
            tokio::time::sleep(Duration::from_millis(delay)).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            if url.starts_with("fail") {
                Err(SearchError::Network(format!("scripted failure for {url}")))
            } else {
                Ok(format!("content of {url}"))
            }
        }
    }

    fn urls(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_owned()).collect()
    }

    #[tokio::test]
    async fn empty_input_returns_immediately() {
        let fetcher = ScriptedFetcher::default();
        let ctx = FetchContext::new();
        let out = fetch_outcomes(&fetcher, &[], &FetchOptions::default(), &ctx).await;
        assert!(out.is_empty());
        assert_eq!(fetch_all(&fetcher, &[], &FetchOptions::default(), &ctx).await, "");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn partial_failures_are_dropped() {
        let fetcher = ScriptedFetcher::default();
        let input = urls(&["a", "fail-1", "b", "fail-2", "c"]);
        let ctx = FetchContext::new();

        let outcomes = fetch_outcomes(&fetcher, &input, &FetchOptions::default(), &ctx).await;
        assert_eq!(outcomes.len(), 5);
        assert_eq!(outcomes.iter().filter(|o| o.is_fetched()).count(), 3);

        let aggregate = fetch_all(&fetcher, &input, &FetchOptions::default(), &ctx).await;
        let mut lines: Vec<&str> = aggregate.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["content of a", "content of b", "content of c"]);
    }

    #[tokio::test]
    async fn all_failures_yield_empty_string() {
        let fetcher = ScriptedFetcher::default();
        let input = urls(&["fail-a", "fail-b", "fail-c"]);
        let aggregate =
            fetch_all(&fetcher, &input, &FetchOptions::default(), &FetchContext::new()).await;
        assert_eq!(aggregate, "");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn concurrency_is_bounded() {
        let fetcher = ScriptedFetcher::with_delay(20);
        let input = urls(&["1", "2", "3", "4", "5", "6"]);
        let outcomes =
            fetch_outcomes(&fetcher, &input, &FetchOptions::new(2), &FetchContext::new()).await;
        assert_eq!(outcomes.len(), 6);
        assert_eq!(fetcher.peak.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn zero_concurrency_runs_one_at_a_time() {
        let fetcher = ScriptedFetcher::with_delay(5);
        let input = urls(&["1", "2", "3"]);
        let outcomes =
            fetch_outcomes(&fetcher, &input, &FetchOptions::new(0), &FetchContext::new()).await;
        assert_eq!(outcomes.len(), 3);
        assert_eq!(fetcher.peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn outcomes_arrive_in_completion_order() {
        let fetcher = ScriptedFetcher::default().slow("first-but-slow", 100);
        let input = urls(&["first-but-slow", "second-but-fast"]);
        let outcomes =
            fetch_outcomes(&fetcher, &input, &FetchOptions::new(2), &FetchContext::new()).await;
        assert_eq!(outcomes[0].url(), "second-but-fast");
        assert_eq!(outcomes[1].url(), "first-but-slow");
    }

    #[tokio::test]
    async fn cancelled_context_fetches_nothing() {
        let fetcher = ScriptedFetcher::default();
        let ctx = FetchContext::new();
        ctx.cancel();

        let input = urls(&["a", "b"]);
        let outcomes = fetch_outcomes(&fetcher, &input, &FetchOptions::default(), &ctx).await;
        assert!(outcomes.iter().all(|o| matches!(
            o,
            FetchOutcome::Failed {
                error: SearchError::Cancelled(_),
                ..
            }
        )));
        assert_eq!(fetch_all(&fetcher, &input, &FetchOptions::default(), &ctx).await, "");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn cancellation_stops_in_flight_tasks() {
        let fetcher = ScriptedFetcher::with_delay(5_000);
        let ctx = FetchContext::new();
        let trigger = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let started = std::time::Instant::now();
        let aggregate =
            fetch_all(&fetcher, &urls(&["a", "b", "c"]), &FetchOptions::default(), &ctx).await;
        assert_eq!(aggregate, "");
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn deadline_drops_slow_pages_only() {
        let fetcher = ScriptedFetcher::default().slow("slow", 2_000);
        let ctx = FetchContext::new().with_timeout(Duration::from_millis(100));
        let input = urls(&["fast", "slow"]);

        let outcomes = fetch_outcomes(&fetcher, &input, &FetchOptions::default(), &ctx).await;
        let slow = outcomes
            .iter()
            .find(|o| o.url() == "slow")
            .expect("slow outcome");
        assert!(matches!(
            slow,
            FetchOutcome::Failed {
                error: SearchError::DeadlineExceeded(_),
                ..
            }
        ));
        let fast = outcomes
            .iter()
            .find(|o| o.url() == "fast")
            .expect("fast outcome");
        assert_eq!(fast.content(), Some("content of fast"));
    }

    #[test]
    fn options_from_config() {
        let config = FetchConfig {
            max_concurrency: 3,
            ..Default::default()
        };
        assert_eq!(FetchOptions::from(&config).limit(), 3);
        assert_eq!(FetchOptions::default().max_concurrency, 8);
        assert_eq!(FetchOptions::new(0).limit(), 1);
    }
}
