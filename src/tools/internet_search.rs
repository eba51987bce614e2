//! Internet search tool — SearXNG-backed web search with intent routing.
//!
//! Wraps [`searxng_search`] behind the [`Tool`] trait: checks the plugin
//! config, turns raw JSON arguments into a [`SearchRequest`], runs the
//! search and renders `{ "results": [...] }` as pretty-printed JSON text.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use searxng_search::{RoutingResolver, SearchCategory, SearchRequest, SearchResult};

use crate::config::PluginConfig;
use crate::error::ToolError;

use super::types::{Tool, ToolResult};

/// Upper bound advertised in the schema. Counts above [`searxng_search::types::MAX_COUNT`]
/// are accepted and clamped.
const SCHEMA_MAX_COUNT: u64 = 20;

/// Tool that searches the web through a SearXNG instance.
///
/// This is a **read-only** tool.
///
/// # Arguments (JSON)
///
/// - `query` (string, required) — the search query
/// - `count` (number, optional) — results to return, default 5, clamped to 1–10
/// - `category` (string, optional) — `general` (default), `news`, `academic` or `social`
pub struct InternetSearchTool {
    config: PluginConfig,
    resolver: Option<Arc<RoutingResolver>>,
}

impl InternetSearchTool {
    /// Create a tool bound to the given plugin configuration.
    ///
    /// General-category routing is memoised process-wide.
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            resolver: None,
        }
    }

    /// Use a dedicated routing resolver instead of the process-wide one.
    pub fn with_resolver(mut self, resolver: Arc<RoutingResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }
}

#[derive(Serialize)]
struct ResultsPayload<'a> {
    results: &'a [SearchResult],
}

/// Render results as the tool's text payload (2-space indented JSON).
///
/// # Errors
///
/// Returns [`ToolError::RequestError`] if serialization fails.
pub fn render_payload(results: &[SearchResult]) -> Result<String, ToolError> {
    serde_json::to_string_pretty(&ResultsPayload { results })
        .map_err(|e| ToolError::RequestError(format!("failed to render results: {e}")))
}

/// Convert raw tool arguments into a [`SearchRequest`].
///
/// # Errors
///
/// Returns [`ToolError::InvalidArguments`] if `query` is missing, not a
/// string or blank, if `count` is not a number, or if `category` is not one
/// of the known categories.
pub fn parse_request(args: &Value) -> Result<SearchRequest, ToolError> {
    if !args.is_object() {
        return Err(ToolError::InvalidArguments(
            "arguments must be a JSON object".into(),
        ));
    }

    let query = args.get("query").and_then(Value::as_str).ok_or_else(|| {
        ToolError::InvalidArguments("missing required argument: query".into())
    })?;

    let count = match args.get("count") {
        None | Some(Value::Null) => None,
        Some(v) => Some(v.as_f64().ok_or_else(|| {
            ToolError::InvalidArguments("count must be a number".into())
        })?),
    };

    let category = match args.get("category") {
        None | Some(Value::Null) => None,
        Some(v) => {
            let name = v.as_str().ok_or_else(|| {
                ToolError::InvalidArguments("category must be a string".into())
            })?;
            Some(SearchCategory::from_name(name).ok_or_else(|| {
                ToolError::InvalidArguments(format!("unknown category: {}", name.trim()))
            })?)
        }
    };

    SearchRequest::new(query, count, category).map_err(ToolError::from)
}

#[async_trait]
impl Tool for InternetSearchTool {
    fn name(&self) -> &str {
        "internet_search"
    }

    fn description(&self) -> &str {
        "Search the web using a SearXNG instance. Use this to gather news and learn new information. \
         Use category='news' for recent events, 'academic' for research papers, 'social' for opinions/discussions."
    }

    fn schema(&self) -> Value {
        let categories: Vec<&str> = SearchCategory::all().iter().map(|c| c.name()).collect();
        serde_json::json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "query": { "type": "string" },
                "count": {
                    "type": "number",
                    "minimum": 1,
                    "maximum": SCHEMA_MAX_COUNT,
                    "default": searxng_search::types::DEFAULT_COUNT
                },
                "category": {
                    "type": "string",
                    "enum": categories,
                    "default": SearchCategory::General.name(),
                    "description": "general=broad web search (default); news=recent news & events; \
                                    academic=arxiv/Scholar/PubMed; social=Reddit discussions"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        args: Value,
        cancel: CancellationToken,
    ) -> Result<ToolResult, ToolError> {
        // Config is checked before anything else so a misconfigured plugin
        // never reaches the network.
        let search_config = self.config.to_search_config()?;
        let request = parse_request(&args)?;

        tracing::debug!(
            category = %request.category(),
            count = request.count(),
            "internet_search invoked"
        );
        tracing::trace!(query = request.query(), "internet_search query");

        let outcome = match self.resolver {
            Some(ref resolver) => {
                searxng_search::search_with(resolver, &request, &search_config, &cancel).await
            }
            None => searxng_search::search(&request, &search_config, &cancel).await,
        };

        let results = outcome.map_err(|e| {
            tracing::warn!(error = %e, "internet_search failed");
            ToolError::from(e)
        })?;

        Ok(ToolResult::text(render_payload(&results)?))
    }
}
