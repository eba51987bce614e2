//! Error types for the internet-search tool.
//!
//! Each error variant carries a stable error code (SCREAMING_SNAKE_CASE)
//! that is included in the Display output and accessible via [`ToolError::code()`].
//! Codes are part of the public API contract and will not change.

use searxng_search::SearchError;

/// Stable error codes for programmatic error handling.
pub mod error_codes {
    /// Invalid or missing plugin configuration.
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

    /// Tool arguments violate the parameter schema.
    pub const INVALID_ARGUMENTS: &str = "INVALID_ARGUMENTS";

    /// The search backend answered with a non-success HTTP status.
    pub const BACKEND_HTTP: &str = "BACKEND_HTTP";

    /// The request to the search backend could not be completed.
    pub const REQUEST_FAILED: &str = "REQUEST_FAILED";

    /// The invocation was cancelled by the caller.
    pub const CANCELLED: &str = "CANCELLED";
}

/// Errors that fail a tool invocation.
///
/// The Display impl formats as `[CODE] message`.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid or missing plugin configuration.
    #[error("[{}] {}", error_codes::CONFIG_INVALID, .0)]
    ConfigError(String),

    /// Tool arguments violate the parameter schema.
    #[error("[{}] {}", error_codes::INVALID_ARGUMENTS, .0)]
    InvalidArguments(String),

    /// The search backend answered with a non-success HTTP status.
    #[error("[{}] SearXNG HTTP {}", error_codes::BACKEND_HTTP, .0)]
    BackendHttp(u16),

    /// The request to the search backend could not be completed.
    #[error("[{}] {}", error_codes::REQUEST_FAILED, .0)]
    RequestError(String),

    /// The invocation was cancelled by the caller.
    #[error("[{}] search cancelled", error_codes::CANCELLED)]
    Cancelled,
}

impl ToolError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => error_codes::CONFIG_INVALID,
            Self::InvalidArguments(_) => error_codes::INVALID_ARGUMENTS,
            Self::BackendHttp(_) => error_codes::BACKEND_HTTP,
            Self::RequestError(_) => error_codes::REQUEST_FAILED,
            Self::Cancelled => error_codes::CANCELLED,
        }
    }

    /// HTTP status for [`ToolError::BackendHttp`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BackendHttp(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<SearchError> for ToolError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Config(m) => Self::ConfigError(m),
            SearchError::InvalidRequest(m) => Self::InvalidArguments(m),
            SearchError::Status(status) => Self::BackendHttp(status),
            SearchError::Cancelled => Self::Cancelled,
            e @ (SearchError::Http(_) | SearchError::Parse(_)) => Self::RequestError(e.to_string()),
        }
    }
}

/// Convenience alias for tool results.
pub type Result<T> = std::result::Result<T, ToolError>;
