//! Error types for the searxng-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. The SearXNG access token never appears in
//! error messages.

/// Errors that can fail a search invocation.
///
/// Routing-resolution and per-result shaping problems are recovered
/// locally and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Invalid or missing backend configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The request to the backend could not be sent or its body not read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The search endpoint answered with a non-success status code.
    #[error("SearXNG HTTP {0}")]
    Status(u16),

    /// The search endpoint answered with a body that is not JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The caller cancelled the invocation while a call was in flight.
    #[error("search cancelled")]
    Cancelled,

    /// The caller-supplied request violates the request contract.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl SearchError {
    /// HTTP status code for [`SearchError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Convenience type alias for searxng-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
