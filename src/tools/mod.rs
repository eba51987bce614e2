//! Tool surface exposed to the host.
//!
//! # Tools
//!
//! - **internet_search** — Search the web through a SearXNG instance with
//!   intent-based routing (general / news / academic / social)

pub mod internet_search;
pub mod types;

pub use internet_search::InternetSearchTool;
pub use types::{Tool, ToolContent, ToolResult};
