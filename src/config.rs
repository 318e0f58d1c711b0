//! Process configuration read once at startup.
//!
//! [`AppConfig`] is an explicit value handed to each client constructor.
//! Nothing reads the environment after it is built.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use briefer_search::{FetchConfig, SearchConfig};
use serde::{Deserialize, Serialize};

use crate::error::{ResearchError, Result};
use crate::summarize::SummarizerConfig;

/// Environment variable names.
pub mod env_keys {
    /// Search API key.
    pub const SEARCH_API_KEY: &str = "SEARCH_API_KEY";
    /// Search engine / collection identifier.
    pub const SEARCH_ENGINE_ID: &str = "SEARCH_ENGINE_ID";
    /// Optional search endpoint override.
    pub const SEARCH_API_ENDPOINT: &str = "SEARCH_API_ENDPOINT";
    /// LLM API key.
    pub const LLM_API_KEY: &str = "LLM_API_KEY";
    /// Optional LLM base URL override.
    pub const LLM_API_BASE_URL: &str = "LLM_API_BASE_URL";
    /// Optional LLM model override.
    pub const LLM_MODEL: &str = "LLM_MODEL";
    /// Source mode (`snippets` or `pages`).
    pub const BRIEFER_MODE: &str = "BRIEFER_MODE";
}

/// Where the text handed to the summarizer comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Summarize the search API snippets.
    #[default]
    Snippets,
    /// Fetch each result page and summarize the extracted paragraphs.
    Pages,
}

impl SourceMode {
    /// Lowercase name as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snippets => "snippets",
            Self::Pages => "pages",
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceMode {
    type Err = ResearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snippets" => Ok(Self::Snippets),
            "pages" => Ok(Self::Pages),
            other => Err(ResearchError::Config(format!(
                "unknown mode '{other}' (expected 'snippets' or 'pages')"
            ))),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Search API endpoint and credentials.
    pub search: SearchConfig,
    /// Page fetch settings.
    pub fetch: FetchConfig,
    /// LLM settings.
    pub summarizer: SummarizerConfig,
    /// Snippets or fetched pages.
    pub mode: SourceMode,
    /// Optional deadline for the whole page fan-out.
    pub fetch_deadline: Option<Duration>,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first when present;
    /// variables already set in the environment win.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Config`] if `.env` exists but cannot be
    /// parsed, or if a variable has an invalid value.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => tracing::debug!("no .env file found"),
            Err(e) => return Err(ResearchError::Config(format!("failed to load .env: {e}"))),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Missing or blank variables leave the corresponding field unset.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Config`] for an invalid `BRIEFER_MODE`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut search = SearchConfig {
            api_key: get(env_keys::SEARCH_API_KEY),
            engine_id: get(env_keys::SEARCH_ENGINE_ID),
            ..SearchConfig::default()
        };
        if let Some(endpoint) = get(env_keys::SEARCH_API_ENDPOINT) {
            search.endpoint = endpoint;
        }

        let mut summarizer = SummarizerConfig {
            api_key: get(env_keys::LLM_API_KEY),
            ..SummarizerConfig::default()
        };
        if let Some(base_url) = get(env_keys::LLM_API_BASE_URL) {
            summarizer.base_url = base_url;
        }
        if let Some(model) = get(env_keys::LLM_MODEL) {
            summarizer.model = model;
        }

        let mode = match get(env_keys::BRIEFER_MODE) {
            Some(raw) => raw.parse()?,
            None => SourceMode::default(),
        };

        Ok(Self {
            search,
            fetch: FetchConfig::default(),
            summarizer,
            mode,
            fetch_deadline: None,
        })
    }

    /// Check that every credential and setting needed for a run is present.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Config`] naming the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.search
            .validate()
            .map_err(|e| ResearchError::Config(e.to_string()))?;
        self.fetch
            .validate()
            .map_err(|e| ResearchError::Config(e.to_string()))?;
        self.summarizer
            .validate()
            .map_err(|e| ResearchError::Config(e.to_string()))?;
        Ok(())
    }
}
