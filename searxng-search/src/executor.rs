//! Search execution against the backend's JSON API.
//!
//! Builds `GET {base}/search?q=..&format=json[&token=..][&categories=..][&engines=..]`
//! deterministically from the request and routing directive, sends it under
//! the caller's cancellation token and checks the HTTP outcome.

use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::SearxngConfig;
use crate::error::SearchError;
use crate::http::{self, FetchError};
use crate::types::RoutingDirective;

/// Response format requested from the backend.
pub const RESPONSE_FORMAT: &str = "json";

/// Build the search URL.
///
/// Parameters are appended in a fixed order: `q`, `format`, `token` (when
/// configured), then whichever of `categories` / `engines` the directive
/// sets. Keys the directive leaves unset are omitted entirely.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the base URL is unusable.
pub fn build_search_url(
    config: &SearxngConfig,
    query: &str,
    directive: &RoutingDirective,
) -> Result<Url, SearchError> {
    let mut url = config.endpoint("/search")?;
    {
        let mut params = url.query_pairs_mut();
        params.append_pair("q", query);
        params.append_pair("format", RESPONSE_FORMAT);
        if let Some(token) = config.token() {
            params.append_pair("token", token);
        }
        if let Some(ref categories) = directive.categories {
            params.append_pair("categories", categories);
        }
        if let Some(ref engines) = directive.engines {
            params.append_pair("engines", engines);
        }
    }
    Ok(url)
}

/// Run one search and return the backend's parsed JSON body.
///
/// The body's schema belongs to the backend and is not validated here.
///
/// # Errors
///
/// - [`SearchError::Cancelled`] if `cancel` fires before the body is read
/// - [`SearchError::Http`] on connection or body-read failure
/// - [`SearchError::Status`] on a non-2xx status
/// - [`SearchError::Parse`] if the body is not JSON
pub async fn execute(
    client: &reqwest::Client,
    config: &SearxngConfig,
    query: &str,
    directive: &RoutingDirective,
    cancel: &CancellationToken,
) -> Result<serde_json::Value, SearchError> {
    let url = build_search_url(config, query, directive)?;
    tracing::trace!(query, ?directive, "sending search request");

    let fetched = http::get(client, url, cancel).await.map_err(|e| match e {
        FetchError::Cancelled => SearchError::Cancelled,
        FetchError::Transport(msg) => SearchError::Http(msg),
    })?;

    if !fetched.status.is_success() {
        let status = fetched.status.as_u16();
        tracing::warn!(status, "search request rejected by backend");
        return Err(SearchError::Status(status));
    }

    serde_json::from_str(&fetched.body)
        .map_err(|e| SearchError::Parse(format!("search response is not JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn has_key(url: &Url, key: &str) -> bool {
        url.query_pairs().any(|(k, _)| k == key)
    }

    #[test]
    fn base_parameters_in_order() {
        let config = SearxngConfig::new("http://localhost:8080");
        let url = build_search_url(&config, "rust lang", &RoutingDirective::unconstrained())
            .expect("url");
        assert_eq!(url.path(), "/search");
        assert_eq!(
            pairs(&url),
            vec![
                ("q".to_owned(), "rust lang".to_owned()),
                ("format".to_owned(), "json".to_owned()),
            ]
        );
    }

    #[test]
    fn token_added_when_configured() {
        let config = SearxngConfig::new("http://localhost").with_token("s3cret");
        let url = build_search_url(&config, "q", &RoutingDirective::unconstrained())
            .expect("url");
        assert!(pairs(&url).contains(&("token".to_owned(), "s3cret".to_owned())));
    }

    #[test]
    fn blank_token_omitted() {
        let config = SearxngConfig::new("http://localhost").with_token("");
        let url = build_search_url(&config, "q", &RoutingDirective::unconstrained())
            .expect("url");
        assert!(!has_key(&url, "token"));
    }

    #[test]
    fn categories_directive_sets_only_categories() {
        let config = SearxngConfig::new("http://localhost");
        let url = build_search_url(&config, "q", &RoutingDirective::categories("news"))
            .expect("url");
        assert!(pairs(&url).contains(&("categories".to_owned(), "news".to_owned())));
        assert!(!has_key(&url, "engines"));
    }

    #[test]
    fn engines_directive_sets_only_engines() {
        let config = SearxngConfig::new("http://localhost");
        let directive = RoutingDirective::engines("arxiv,google scholar,pubmed");
        let url = build_search_url(&config, "q", &directive).expect("url");
        assert!(pairs(&url).contains(&(
            "engines".to_owned(),
            "arxiv,google scholar,pubmed".to_owned()
        )));
        assert!(!has_key(&url, "categories"));
    }

    #[test]
    fn query_is_encoded() {
        let config = SearxngConfig::new("http://localhost");
        let url = build_search_url(&config, "a&b=c d", &RoutingDirective::unconstrained())
            .expect("url");
        assert_eq!(pairs(&url)[0], ("q".to_owned(), "a&b=c d".to_owned()));
    }

    #[test]
    fn build_is_deterministic() {
        let config = SearxngConfig::new("http://localhost").with_token("t");
        let directive = RoutingDirective::engines("reddit");
        let a = build_search_url(&config, "same", &directive).expect("url");
        let b = build_search_url(&config, "same", &directive).expect("url");
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let config = SearxngConfig::new("");
        let err = build_search_url(&config, "q", &RoutingDirective::unconstrained())
            .unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }
}
