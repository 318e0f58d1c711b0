//! The research driver: one query in, one [`ResearchReport`] out.
//!
//! Stages run strictly in sequence:
//!
//! 1. search the query
//! 2. collate snippets, or fetch every result page and collate the content
//! 3. summarize the collated text (skipped when it is empty)

use briefer_search::{
    collate, fetch_all, ContentFetcher, FetchContext, FetchOptions, GoogleSearch, PageFetcher,
    SearchBackend,
};

use crate::config::{AppConfig, SourceMode};
use crate::error::{ResearchError, Result};
use crate::summarize::{OpenAiSummarizer, Summarizer};

use super::report::ResearchReport;

/// Runs the search → gather → summarize pipeline.
pub struct Researcher<S, P, L> {
    search: S,
    fetcher: P,
    summarizer: L,
    mode: SourceMode,
    options: FetchOptions,
}

/// The production pipeline over Google search, HTTP page fetches and OpenAI.
pub type DefaultResearcher = Researcher<GoogleSearch, ContentFetcher, OpenAiSummarizer>;

impl DefaultResearcher {
    /// Build the production pipeline from `config`.
    ///
    /// Credentials are not checked here; a missing key surfaces when the
    /// corresponding stage runs. Call [`AppConfig::validate`] to fail early.
    ///
    /// # Errors
    ///
    /// Returns an error when an HTTP client cannot be constructed or the
    /// fetch settings are invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let search = GoogleSearch::new(config.search.clone())?;
        let fetcher = ContentFetcher::new(&config.fetch)?;
        let summarizer = OpenAiSummarizer::new(config.summarizer.clone())?;
        Ok(Researcher::new(search, fetcher, summarizer)
            .with_mode(config.mode)
            .with_options(FetchOptions::from(&config.fetch)))
    }
}

impl<S, P, L> Researcher<S, P, L>
where
    S: SearchBackend,
    P: PageFetcher,
    L: Summarizer,
{
    /// A pipeline in [`SourceMode::Snippets`] with default fetch options.
    pub fn new(search: S, fetcher: P, summarizer: L) -> Self {
        Self {
            search,
            fetcher,
            summarizer,
            mode: SourceMode::default(),
            options: FetchOptions::default(),
        }
    }

    /// Choose where the summarized text comes from.
    pub fn with_mode(mut self, mode: SourceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the page fan-out tuning used in [`SourceMode::Pages`].
    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// The configured source mode.
    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    /// The configured fan-out tuning.
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Run the pipeline for `query`.
    ///
    /// Every stage races the cancellation token of `ctx`. The deadline of
    /// `ctx` bounds only the page fan-out in [`SourceMode::Pages`].
    ///
    /// # Errors
    ///
    /// - [`ResearchError::EmptyQuery`] when `query` is blank (no network I/O)
    /// - [`ResearchError::Cancelled`] when `ctx` is cancelled before the run ends
    /// - [`ResearchError::Search`] when the search call fails
    /// - [`ResearchError::Summarize`] when the summarizer fails
    ///
    /// Page fetch failures are never errors.
    pub async fn run(&self, query: &str, ctx: &FetchContext) -> Result<ResearchReport> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ResearchError::EmptyQuery);
        }

        tracing::trace!(query, backend = self.search.name(), "searching");
        let results = until_cancelled(ctx, self.search.search(query)).await??;
        tracing::info!(count = results.len(), "search complete");

        let collated = match self.mode {
            SourceMode::Snippets => collate(&results),
            SourceMode::Pages => {
                let links: Vec<String> = results.iter().map(|r| r.link.clone()).collect();
                let pages = fetch_all(&self.fetcher, &links, &self.options, ctx).await;
                if ctx.is_cancelled() {
                    return Err(ResearchError::Cancelled);
                }
                if pages.is_empty() && !results.is_empty() {
                    tracing::warn!("no page content fetched, falling back to snippets");
                    collate(&results)
                } else {
                    pages
                }
            }
        };

        let summary = if collated.is_empty() {
            tracing::info!("nothing to summarize");
            None
        } else {
            tracing::debug!(
                summarizer = self.summarizer.name(),
                chars = collated.chars().count(),
                "summarizing"
            );
            Some(until_cancelled(ctx, self.summarizer.summarize(&collated)).await??)
        };

        Ok(ResearchReport {
            query: query.to_owned(),
            mode: self.mode,
            results,
            collated,
            summary,
        })
    }
}

/// Drive `fut` unless the cancellation token of `ctx` fires first.
async fn until_cancelled<F: Future>(ctx: &FetchContext, fut: F) -> Result<F::Output> {
    tokio::select! {
        biased;
        () = ctx.cancel_token().cancelled() => Err(ResearchError::Cancelled),
        output = fut => Ok(output),
    }
}
