//! internet-search: a SearXNG-backed `internet_search` tool.
//!
//! The tool routes each query by intent (`general`, `news`, `academic`,
//! `social`), runs it against a configured SearXNG instance and returns the
//! top results as a JSON text payload.
//!
//! # Architecture
//!
//! - **[`config`]**: host-provided plugin settings (`searxngUrl`, `searxngToken`)
//! - **[`tools`]**: the [`Tool`](tools::Tool) trait and [`InternetSearchTool`]
//! - **[`error`]**: [`ToolError`] with stable error codes
//!
//! Routing, HTTP and result shaping live in the `searxng-search` crate.

pub mod config;
pub mod error;
pub mod tools;

pub use config::PluginConfig;
pub use error::{Result, ToolError};
pub use tools::{InternetSearchTool, Tool, ToolContent, ToolResult};
