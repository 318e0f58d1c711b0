//! Error types for the summarizer client.
//!
//! Each error variant carries a stable error code (SCREAMING_SNAKE_CASE)
//! that is included in the Display output and accessible via [`SummarizeError::code()`].

/// Stable error codes for programmatic error handling.
pub mod error_codes {
    /// Missing API key or invalid summarizer configuration.
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

    /// Transport-level failure talking to the LLM API.
    pub const NETWORK_FAILED: &str = "NETWORK_FAILED";

    /// The LLM API answered with a non-OK status.
    pub const API_ERROR: &str = "API_ERROR";

    /// A successful response body could not be decoded.
    pub const DECODE_FAILED: &str = "DECODE_FAILED";

    /// The response decoded but contained no choices.
    pub const EMPTY_RESPONSE: &str = "EMPTY_RESPONSE";
}

/// Errors produced by a [`Summarizer`](super::Summarizer).
///
/// The Display impl formats as `[CODE] message`.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    /// Missing API key or invalid configuration.
    #[error("[{}] {}", error_codes::CONFIG_INVALID, .0)]
    ConfigError(String),

    /// Transport-level failure.
    #[error("[{}] {}", error_codes::NETWORK_FAILED, .0)]
    NetworkError(String),

    /// The remote rejected the request; `details` is the best-effort
    /// decoded error payload.
    #[error("[{code}] HTTP {status}: {details}", code = error_codes::API_ERROR)]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Error message from the body, or the raw body.
        details: String,
    },

    /// The success body did not match the expected shape.
    #[error("[{}] {}", error_codes::DECODE_FAILED, .0)]
    DecodeError(String),

    /// The response contained zero choices.
    #[error("[{}] no content in response", error_codes::EMPTY_RESPONSE)]
    EmptyResponse,
}

impl SummarizeError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => error_codes::CONFIG_INVALID,
            Self::NetworkError(_) => error_codes::NETWORK_FAILED,
            Self::ApiError { .. } => error_codes::API_ERROR,
            Self::DecodeError(_) => error_codes::DECODE_FAILED,
            Self::EmptyResponse => error_codes::EMPTY_RESPONSE,
        }
    }
}
