//! Backend engine-configuration probe and its classification.
//!
//! The probe reads `GET {base}/config`, which lists every engine the
//! instance knows about together with its `enabled` flag and category
//! tags. Only the derived [`RoutingDirective`] outlives the probe.

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::config::SearxngConfig;
use crate::http::{self, FetchError};
use crate::types::RoutingDirective;

/// Backend category tag for general-purpose engines.
pub const GENERAL_TAG: &str = "general";
/// Backend category tag for web engines, the fallback proxy for "general".
pub const WEB_TAG: &str = "web";

/// The subset of `/config` this crate reads. Absent fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendEngineConfig {
    /// Every engine the backend reports, enabled or not.
    #[serde(default)]
    pub engines: Vec<EngineEntry>,
}

/// One engine as reported by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineEntry {
    /// Engine name, informational only.
    #[serde(default)]
    pub name: Option<String>,
    /// Absent or `null` counts as disabled.
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Category tags; absent or `null` means none.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl EngineEntry {
    /// Whether the backend reports this engine as enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled == Some(true)
    }

    /// Whether this engine carries the given category tag.
    pub fn serves(&self, tag: &str) -> bool {
        self.categories
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

/// Why a probe produced no usable configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeFailure {
    /// `/config` answered with a non-success status.
    #[error("config probe returned HTTP {0}")]
    Status(u16),
    /// The request could not be completed.
    #[error("config probe request failed: {0}")]
    Transport(String),
    /// The body was not a recognisable engine list.
    #[error("config probe body unreadable: {0}")]
    Parse(String),
    /// The caller cancelled while the probe was in flight.
    #[error("config probe cancelled")]
    Cancelled,
}

/// Fetch and parse the backend's engine configuration.
///
/// # Errors
///
/// Returns a [`ProbeFailure`] describing why no configuration is available.
pub async fn probe_engine_config(
    client: &reqwest::Client,
    config: &SearxngConfig,
    cancel: &CancellationToken,
) -> Result<BackendEngineConfig, ProbeFailure> {
    let mut url = config
        .endpoint("/config")
        .map_err(|e| ProbeFailure::Transport(e.to_string()))?;
    if let Some(token) = config.token() {
        url.query_pairs_mut().append_pair("token", token);
    }

    let fetched = http::get(client, url, cancel).await.map_err(|e| match e {
        FetchError::Cancelled => ProbeFailure::Cancelled,
        FetchError::Transport(msg) => ProbeFailure::Transport(msg),
    })?;

    if !fetched.status.is_success() {
        return Err(ProbeFailure::Status(fetched.status.as_u16()));
    }

    serde_json::from_str(&fetched.body).map_err(|e| ProbeFailure::Parse(e.to_string()))
}

/// Decide the general-category directive from a backend configuration.
///
/// First match wins:
/// 1. any enabled engine tagged `general` → unconstrained (defaults already
///    cover general search)
/// 2. any enabled engine tagged `web` → `categories=web`
/// 3. otherwise → unconstrained
pub fn classify(engine_config: &BackendEngineConfig) -> RoutingDirective {
    let enabled = || engine_config.engines.iter().filter(|e| e.is_enabled());
    let general = enabled().filter(|e| e.serves(GENERAL_TAG)).count();
    let web = enabled().filter(|e| e.serves(WEB_TAG)).count();

    tracing::debug!(
        engines = engine_config.engines.len(),
        enabled = enabled().count(),
        general,
        web,
        "classified backend engine configuration"
    );

    if general > 0 {
        RoutingDirective::unconstrained()
    } else if web > 0 {
        RoutingDirective::categories(WEB_TAG)
    } else {
        RoutingDirective::unconstrained()
    }
}
