//! Plugin configuration for the internet-search tool.
//!
//! The host hands the plugin a small config object. It can also be read
//! from a TOML file, with `SEARXNG_URL` / `SEARXNG_TOKEN` overriding file
//! values for the headless host binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use searxng_search::SearxngConfig;

use crate::error::ToolError;

/// Environment variable overriding [`PluginConfig::searxng_url`].
pub const URL_ENV: &str = "SEARXNG_URL";
/// Environment variable overriding [`PluginConfig::searxng_token`].
pub const TOKEN_ENV: &str = "SEARXNG_TOKEN";

/// Host-provided plugin configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    /// Base URL of the SearXNG instance. Required at invocation time.
    pub searxng_url: Option<String>,
    /// Access token sent as the `token` query parameter when non-empty.
    pub searxng_token: Option<String>,
}

impl PluginConfig {
    /// Build from a host-supplied JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::ConfigError`] if the value has the wrong shape.
    pub fn from_json(value: serde_json::Value) -> crate::error::Result<Self> {
        serde_json::from_value(value).map_err(|e| ToolError::ConfigError(e.to_string()))
    }

    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ToolError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| ToolError::ConfigError(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ToolError::ConfigError(e.to_string()))?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ToolError::ConfigError(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ToolError::ConfigError(e.to_string()))
    }

    /// Overlay non-blank values from the environment lookup `var`.
    pub fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = var(URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.searxng_url = Some(url);
        }
        if let Some(token) = var(TOKEN_ENV).filter(|v| !v.trim().is_empty()) {
            self.searxng_token = Some(token);
        }
        self
    }

    /// Overlay `SEARXNG_URL` / `SEARXNG_TOKEN` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Returns the default config file path: `~/.config/internet-search/config.toml`.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("internet-search")
            .join("config.toml")
    }

    /// Convert into backend settings.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::ConfigError`] if `searxngUrl` is missing or blank.
    pub fn to_search_config(&self) -> crate::error::Result<SearxngConfig> {
        let base_url = self
            .searxng_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                ToolError::ConfigError(
                    "searxngUrl is required in the internet-search plugin config".into(),
                )
            })?;

        let mut config = SearxngConfig::new(base_url);
        if let Some(token) = self
            .searxng_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            config = config.with_token(token);
        }
        Ok(config)
    }
}
