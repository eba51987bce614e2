//! Core tool types.
//!
//! Defines the [`Tool`] trait that host-facing tools implement and
//! [`ToolResult`], the content envelope handed back to the host.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::ToolError;

/// One block of tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolContent {
    /// Plain text payload.
    Text {
        /// The text itself.
        text: String,
    },
}

/// Result of a successful tool execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Output blocks, in order.
    pub content: Vec<ToolContent>,
}

impl ToolResult {
    /// A result holding a single text block.
    pub fn text(text: String) -> Self {
        Self {
            content: vec![ToolContent::Text { text }],
        }
    }

    /// The first text block, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .iter()
            .map(|c| match c {
                ToolContent::Text { text } => text.as_str(),
            })
            .next()
    }
}

/// A host-invocable tool.
///
/// All tools must be `Send + Sync`; the host may run many invocations
/// concurrently. Each invocation carries its own cancellation token which
/// must abort any in-flight work.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool name (e.g. "internet_search").
    fn name(&self) -> &str;

    /// Returns a human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's arguments.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given JSON arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError`] for configuration, validation, backend or
    /// cancellation failures.
    async fn execute(
        &self,
        args: serde_json::Value,
        cancel: CancellationToken,
    ) -> Result<ToolResult, ToolError>;
}
