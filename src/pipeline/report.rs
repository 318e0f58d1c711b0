//! The result of one research run.

use std::fmt;

use briefer_search::SearchResult;
use serde::{Deserialize, Serialize};

use crate::config::SourceMode;

/// Everything a research run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchReport {
    /// The trimmed query that was searched.
    pub query: String,
    /// Where the collated text came from.
    pub mode: SourceMode,
    /// Search results, in API order.
    pub results: Vec<SearchResult>,
    /// Text handed to the summarizer.
    pub collated: String,
    /// Summary text, or `None` when there was nothing to summarize.
    pub summary: Option<String>,
}

impl ResearchReport {
    /// `Title/Link/Snippet` blocks, one per result, each followed by a blank line.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for item in &self.results {
            out.push_str(&format!(
                "Title: {}\nLink: {}\nSnippet: {}\n\n",
                item.title, item.link, item.snippet
            ));
        }
        out
    }
}

impl fmt::Display for ResearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.listing())?;
        match &self.summary {
            Some(summary) => write!(f, "Summary:\n{summary}"),
            None => f.write_str("No content to summarize."),
        }
    }
}
