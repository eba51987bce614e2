//! # searxng-search
//!
//! Intent-routed web search against a self-hosted SearXNG instance.
//!
//! A caller picks an intent category (`general`, `news`, `academic`,
//! `social`). This crate turns it into backend routing parameters, runs the
//! search over SearXNG's JSON API and returns a small, cleaned result set.
//!
//! ## Design
//!
//! - Non-general categories route through a static table of
//!   `categories` / `engines` overrides
//! - The general category probes the backend's `/config` once per process
//!   and memoises the decision; probe failures fall back to backend defaults
//! - Every outbound call is bound to the caller's [`CancellationToken`];
//!   there are no internal timeouts or retries
//! - Result shaping never fails: malformed fields degrade to empty strings
//!
//! ## Security
//!
//! - The access token is sent only as a query parameter and never logged
//! - Search queries are logged only at trace level
//! - Transport errors are stripped of request URLs before surfacing

pub mod config;
pub mod content;
pub mod error;
pub mod executor;
pub mod http;
pub mod results;
pub mod routing;
pub mod types;

pub use config::SearxngConfig;
pub use error::{Result, SearchError};
pub use routing::RoutingResolver;
pub use tokio_util::sync::CancellationToken;
pub use types::{RoutingDirective, SearchCategory, SearchRequest, SearchResult};

/// Run a search using the process-wide routing memo.
///
/// Resolves routing for the request's category, executes the search and
/// shapes up to `request.count()` results in backend order.
///
/// # Errors
///
/// - [`SearchError::Config`] if `config` is invalid (no network call is made)
/// - [`SearchError::Status`] if the search endpoint returns a non-2xx status
/// - [`SearchError::Http`] / [`SearchError::Parse`] on transport or body failure
/// - [`SearchError::Cancelled`] if `cancel` fires during either outbound call
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> searxng_search::Result<()> {
/// use searxng_search::{CancellationToken, SearchCategory, SearchRequest, SearxngConfig};
///
/// let config = SearxngConfig::new("http://localhost:8080");
/// let request = SearchRequest::new("rust async runtimes", Some(5.0), Some(SearchCategory::News))?;
/// let results = searxng_search::search(&request, &config, &CancellationToken::new()).await?;
/// for result in &results {
///     println!("{}: {}", result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    request: &SearchRequest,
    config: &SearxngConfig,
    cancel: &CancellationToken,
) -> Result<Vec<SearchResult>> {
    search_with(routing::resolver::shared(), request, config, cancel).await
}

/// Run a search using an explicit [`RoutingResolver`].
///
/// Same as [`search`], but the general-category memo lives in `resolver`
/// rather than the process-wide instance.
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_with(
    resolver: &RoutingResolver,
    request: &SearchRequest,
    config: &SearxngConfig,
    cancel: &CancellationToken,
) -> Result<Vec<SearchResult>> {
    config.validate()?;
    let client = http::build_client(config)?;

    let directive = resolver
        .resolve(request.category(), &client, config, cancel)
        .await;
    tracing::debug!(category = %request.category(), ?directive, "routing resolved");

    let raw = executor::execute(&client, config, request.query(), &directive, cancel).await?;
    let results = results::shape(&raw, request.count());
    tracing::debug!(count = results.len(), "search complete");
    Ok(results)
}
