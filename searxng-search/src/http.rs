//! Shared HTTP plumbing for backend requests.
//!
//! Provides a configured [`reqwest::Client`] and a cancellable GET helper
//! used by both the configuration probe and the search call.

use reqwest::StatusCode;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::SearxngConfig;
use crate::error::SearchError;

/// User-Agent sent when the config does not override it.
const DEFAULT_USER_AGENT: &str = concat!("searxng-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for talking to the backend.
///
/// The client has:
/// - No request timeout (cancellation is caller-driven)
/// - The configured User-Agent, or the crate identifier
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearxngConfig) -> Result<reqwest::Client, SearchError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => DEFAULT_USER_AGENT.to_owned(),
    };

    reqwest::Client::builder()
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Why a cancellable GET did not produce a response.
#[derive(Debug)]
pub(crate) enum FetchError {
    /// The caller's token fired first.
    Cancelled,
    /// Connection, protocol or body-read failure.
    Transport(String),
}

/// A completed GET: status plus body text (empty for non-success statuses).
#[derive(Debug)]
pub(crate) struct Fetched {
    pub status: StatusCode,
    pub body: String,
}

/// Issue a GET and read the body, aborting as soon as `cancel` fires.
///
/// Dropping the in-flight request future on cancellation tears down the
/// connection, so nothing keeps running after this returns.
pub(crate) async fn get(
    client: &reqwest::Client,
    url: Url,
    cancel: &CancellationToken,
) -> Result<Fetched, FetchError> {
    let request = async {
        let resp = client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Ok::<_, reqwest::Error>(Fetched {
                status,
                body: String::new(),
            });
        }
        let body = resp.text().await?;
        Ok(Fetched { status, body })
    };

    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(FetchError::Cancelled),
        // URLs carry the access token; strip them from error text.
        outcome = request => outcome.map_err(|e| FetchError::Transport(e.without_url().to_string())),
    }
}
