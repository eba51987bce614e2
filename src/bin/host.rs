//! Headless host binary for one-shot `internet_search` invocations.
//!
//! Reads the tool arguments as a single JSON object from stdin, runs the
//! search and writes the result envelope (`{"content": [...]}`) to stdout.
//! Ctrl-C cancels the in-flight search.
//!
//! Configuration comes from `$INTERNET_SEARCH_CONFIG` (or the default config
//! path) with `SEARXNG_URL` / `SEARXNG_TOKEN` overriding file values.
//!
//! All tracing/diagnostic output goes to stderr so that stdout stays clean
//! JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use internet_search::{InternetSearchTool, PluginConfig, Tool};
use tokio_util::sync::CancellationToken;

/// Environment variable naming an explicit config file.
const CONFIG_PATH_ENV: &str = "INTERNET_SEARCH_CONFIG";

fn load_config() -> anyhow::Result<PluginConfig> {
    let path = std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(PluginConfig::default_config_path);

    let config = if path.exists() {
        tracing::debug!(path = %path.display(), "loading config");
        PluginConfig::from_file(&path)?
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        PluginConfig::default()
    };
    Ok(config.with_env_overrides())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read arguments from stdin")?;
    let args: serde_json::Value =
        serde_json::from_str(&input).context("arguments must be valid JSON")?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, cancelling search");
            on_interrupt.cancel();
        }
    });

    let tool = InternetSearchTool::new(config);
    let result = tool.execute(args, cancel).await.map_err(|e| {
        tracing::error!(code = e.code(), error = %e, "internet_search failed");
        anyhow::anyhow!("internet_search failed: {e}")
    })?;

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
