//! Routing resolution with a process-lifetime memo for the general category.
//!
//! A [`RoutingResolver`] holds a single slot. The first general-category
//! request probes the backend, classifies the answer and fills the slot;
//! every later request reuses it. There is no TTL and no refresh.
//! Concurrent first-time callers wait on the one in-flight probe rather
//! than issuing their own.

use std::sync::OnceLock;

use tokio::sync::OnceCell;
use tokio_util::sync::CancellationToken;

use crate::config::SearxngConfig;
use crate::types::{RoutingDirective, SearchCategory};

use super::probe::{classify, probe_engine_config, BackendEngineConfig, ProbeFailure};
use super::table;

/// Process-wide resolver used by [`crate::search`].
static SHARED: OnceLock<RoutingResolver> = OnceLock::new();

/// The process-wide resolver. Lazily created on first access.
pub fn shared() -> &'static RoutingResolver {
    SHARED.get_or_init(RoutingResolver::new)
}

/// Resolves intent categories to routing directives.
#[derive(Debug, Default)]
pub struct RoutingResolver {
    general: OnceCell<RoutingDirective>,
}

impl RoutingResolver {
    /// Create a resolver with an unresolved general-category slot.
    pub fn new() -> Self {
        Self {
            general: OnceCell::new(),
        }
    }

    /// The memoised general-category directive, if resolution has completed.
    pub fn cached_general(&self) -> Option<&RoutingDirective> {
        self.general.get()
    }

    /// Resolve the directive for any category.
    ///
    /// Only `General` can touch the network; the rest come from the static
    /// table.
    pub async fn resolve(
        &self,
        category: SearchCategory,
        client: &reqwest::Client,
        config: &SearxngConfig,
        cancel: &CancellationToken,
    ) -> RoutingDirective {
        match category {
            SearchCategory::General => self.resolve_general(client, config, cancel).await,
            other => table::lookup(other),
        }
    }

    /// Resolve the general-category directive, probing at most once.
    ///
    /// Never fails: a probe that errors, is cancelled, or returns an
    /// unreadable body resolves to (and caches) an unconstrained directive.
    ///
    /// A caller waiting on another caller's probe stops waiting as soon as
    /// its own token is cancelled. It gets an unconstrained directive and
    /// leaves the slot untouched.
    pub async fn resolve_general(
        &self,
        client: &reqwest::Client,
        config: &SearxngConfig,
        cancel: &CancellationToken,
    ) -> RoutingDirective {
        // The slot is polled first so the probing caller always records its
        // own outcome, including a cancelled probe.
        tokio::select! {
            biased;
            directive = self.general.get_or_init(|| async {
                let outcome = probe_engine_config(client, config, cancel).await;
                directive_from_probe(outcome)
            }) => directive.clone(),
            () = cancel.cancelled() => {
                tracing::debug!("cancelled while waiting for general routing");
                RoutingDirective::unconstrained()
            }
        }
    }
}

/// Map a probe outcome to the directive to cache.
fn directive_from_probe(outcome: Result<BackendEngineConfig, ProbeFailure>) -> RoutingDirective {
    match outcome {
        Ok(engine_config) => {
            let directive = classify(&engine_config);
            tracing::debug!(?directive, "general routing resolved from backend config");
            directive
        }
        Err(failure) => {
            tracing::warn!(error = %failure, "config probe failed, using backend defaults for general routing");
            RoutingDirective::unconstrained()
        }
    }
}
