//! Shapes the backend's raw result array into the tool's output records.
//!
//! Nothing here fails: a missing or non-array `results`, non-object
//! entries and non-string fields all degrade to empty values.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::content::clean_snippet;
use crate::types::SearchResult;

/// One backend result as far as this crate cares. Non-string fields other
/// than `content` read as `None`.
#[derive(Debug, Default, Deserialize)]
struct RawResult {
    #[serde(default, deserialize_with = "string_or_none")]
    title: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    url: Option<String>,
    /// SearXNG's snippet field. Present but not a string reads as empty,
    /// which still suppresses the `snippet` fallback.
    #[serde(default, deserialize_with = "string_or_empty")]
    content: Option<String>,
    /// Snippet field used by some result templates when `content` is absent.
    #[serde(default, deserialize_with = "string_or_none")]
    snippet: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        _ => Some(String::new()),
    })
}

impl RawResult {
    fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    fn into_result(self) -> SearchResult {
        let snippet = self.content.or(self.snippet).unwrap_or_default();
        SearchResult {
            title: self.title.unwrap_or_default().trim().to_owned(),
            url: self.url.unwrap_or_default().trim().to_owned(),
            snippet: clean_snippet(&snippet),
        }
    }
}

/// Extract, truncate and clean the first `count` results in backend order.
pub fn shape(raw: &Value, count: usize) -> Vec<SearchResult> {
    let Some(entries) = raw.get("results").and_then(Value::as_array) else {
        tracing::debug!("backend response has no results array");
        return Vec::new();
    };

    entries
        .iter()
        .take(count)
        .map(|entry| RawResult::from_value(entry).into_result())
        .collect()
}
