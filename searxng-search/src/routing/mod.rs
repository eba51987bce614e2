//! Query routing: intent category → backend category/engine overrides.
//!
//! Non-general categories map through a static table. The general category
//! is resolved once per process by probing the backend's own engine
//! configuration and memoising the classification.

pub mod probe;
pub mod resolver;
pub mod table;

pub use probe::{BackendEngineConfig, EngineEntry, ProbeFailure};
pub use resolver::RoutingResolver;
