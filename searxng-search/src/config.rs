//! Backend connection settings.
//!
//! [`SearxngConfig`] names the SearXNG instance to talk to and the optional
//! access token attached to every outbound call. There is deliberately no
//! timeout here: in-flight calls end only when the backend answers or the
//! caller cancels.

use url::Url;

use crate::error::SearchError;

/// Connection settings for a SearXNG backend.
#[derive(Debug, Clone, Default)]
pub struct SearxngConfig {
    /// Base URL of the instance, e.g. `https://search.example.org`.
    pub base_url: String,
    /// Access token sent as the `token` query parameter when non-empty.
    pub token: Option<String>,
    /// Custom User-Agent string. If `None`, the crate's own identifier is used.
    pub user_agent: Option<String>,
}

impl SearxngConfig {
    /// Create a config for the given base URL with no token.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Attach an access token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The token to send, if one is configured and not blank.
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must not be blank
    /// - `base_url` must parse as an absolute `http` or `https` URL
    pub fn validate(&self) -> Result<(), SearchError> {
        self.base().map(|_| ())
    }

    /// Parse the base URL.
    pub(crate) fn base(&self) -> Result<Url, SearchError> {
        let raw = self.base_url.trim();
        if raw.is_empty() {
            return Err(SearchError::Config("base_url must not be empty".into()));
        }
        let url = Url::parse(raw)
            .map_err(|e| SearchError::Config(format!("base_url is not a valid URL: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SearchError::Config(format!(
                "base_url must use http or https, got {other}"
            ))),
        }
    }

    /// Resolve an absolute endpoint path (e.g. `/search`) against the base URL.
    ///
    /// The path replaces any path on the base URL, so `http://host/sub/`
    /// resolves `/search` to `http://host/search`.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, SearchError> {
        self.base()?
            .join(path)
            .map_err(|e| SearchError::Config(format!("cannot build {path} endpoint: {e}")))
    }
}
