//! Research pipeline: search, gather text, summarize.

pub mod report;
pub mod researcher;

pub use report::ResearchReport;
pub use researcher::{DefaultResearcher, Researcher};
