//! Core types: search requests, intent categories, routing directives and results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SearchError;

/// Result count used when the caller does not supply one.
pub const DEFAULT_COUNT: usize = 5;
/// Smallest effective result count.
pub const MIN_COUNT: usize = 1;
/// Largest effective result count.
pub const MAX_COUNT: usize = 10;

/// Caller-selected search mode. Determines how the request is routed
/// across the backend's engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    /// Broad web search using the backend's default engine set.
    #[default]
    General,
    /// Recent news and events.
    News,
    /// Research papers (arXiv, Google Scholar, PubMed).
    Academic,
    /// Discussions and opinions (Reddit).
    Social,
}

impl SearchCategory {
    /// Returns the wire name of this category.
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::News => "news",
            Self::Academic => "academic",
            Self::Social => "social",
        }
    }

    /// Parse a wire name. Surrounding whitespace is ignored; matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "general" => Some(Self::General),
            "news" => Some(Self::News),
            "academic" => Some(Self::Academic),
            "social" => Some(Self::Social),
            _ => None,
        }
    }

    /// Returns all categories in declaration order.
    pub fn all() -> &'static [SearchCategory] {
        &[Self::General, Self::News, Self::Academic, Self::Social]
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional backend query-parameter overrides steering which engines run.
///
/// An empty directive means "use the backend's defaults".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDirective {
    /// Value for the backend's `categories` parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    /// Value for the backend's `engines` parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engines: Option<String>,
}

impl RoutingDirective {
    /// A directive that adds no constraint.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// A directive restricting the search to the given backend categories.
    pub fn categories(value: impl Into<String>) -> Self {
        Self {
            categories: Some(value.into()),
            engines: None,
        }
    }

    /// A directive restricting the search to the given backend engines.
    pub fn engines(value: impl Into<String>) -> Self {
        Self {
            categories: None,
            engines: Some(value.into()),
        }
    }

    /// Whether this directive leaves routing to the backend.
    pub fn is_unconstrained(&self) -> bool {
        self.categories.is_none() && self.engines.is_none()
    }
}

/// A validated search request. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    count: usize,
    category: SearchCategory,
}

impl SearchRequest {
    /// Build a request from caller-supplied values.
    ///
    /// The query is trimmed and must not be empty. `count` defaults to
    /// [`DEFAULT_COUNT`], is clamped to `[MIN_COUNT, MAX_COUNT]` and then
    /// truncated toward zero. `category` defaults to
    /// [`SearchCategory::General`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidRequest`] if the query is blank.
    pub fn new(
        query: &str,
        count: Option<f64>,
        category: Option<SearchCategory>,
    ) -> Result<Self, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidRequest(
                "query must not be empty".into(),
            ));
        }
        Ok(Self {
            query: query.to_owned(),
            count: count.map_or(DEFAULT_COUNT, clamp_count),
            category: category.unwrap_or_default(),
        })
    }

    /// The trimmed query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The effective result count, always within `[MIN_COUNT, MAX_COUNT]`.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The intent category.
    pub fn category(&self) -> SearchCategory {
        self.category
    }
}

/// Clamp a raw, possibly fractional, count into `[MIN_COUNT, MAX_COUNT]`.
pub fn clamp_count(raw: f64) -> usize {
    if raw.is_nan() {
        return MIN_COUNT;
    }
    raw.clamp(MIN_COUNT as f64, MAX_COUNT as f64).trunc() as usize
}

/// A single cleaned search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title, trimmed. Markup is left untouched.
    pub title: String,
    /// Result URL, trimmed.
    pub url: String,
    /// Plain-text snippet with markup stripped and whitespace collapsed.
    pub snippet: String,
}
