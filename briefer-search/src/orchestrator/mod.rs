//! Fetch orchestrator: bounded concurrent page fetches with fan-in.
//!
//! Runs a [`PageFetcher`](crate::fetcher::PageFetcher) over a set of URLs
//! with at most `max_concurrency` requests in flight. Every task sees the
//! same [`FetchContext`], so one cancellation token or deadline stops them
//! all. Failures are logged and dropped; the orchestrator itself never fails.

pub mod context;
pub mod fan_out;

pub use context::FetchContext;
pub use fan_out::{fetch_all, fetch_outcomes, FetchOptions};
