// src/lib.rs
use anyhow::Result;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod config;
mod infrastructure;
mod registry;

// Hoist up only the public symbol(s)
pub use registry::Observability;

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_null_error_reporter, // ---
    create_null_logger,
    create_null_metrics,
    create_null_profiler,
};

/// Build the observability registry with backends determined by configuration.
///
/// Intended to be called once at process startup; the returned registry
/// is immutable and safe to clone into any number of consumers. Every
/// concern currently resolves to its null backend; hosts with real
/// backends substitute them behind the same traits.
pub fn create_observability(config: &ObservabilityConfig) -> Result<Observability> {
    // ---
    tracing_subscriber::fmt::try_init().ok(); // ✅ Ignores if already initialized

    let logger = match config.logger {
        Backend::Null => create_null_logger()?,
    };
    let error_reporter = match config.error_reporter {
        Backend::Null => create_null_error_reporter()?,
    };
    let metrics = match config.metrics {
        Backend::Null => create_null_metrics()?,
    };
    let profiler = match config.profiler {
        Backend::Null => create_null_profiler()?,
    };

    tracing::debug!("Observability registry assembled");

    Ok(Observability::new(logger, error_reporter, metrics, profiler))
}

/// Build a registry wired entirely with the inert null backends.
///
/// Shorthand for hosts (and tests) that skip configuration and want
/// observability calls silently absorbed.
pub fn create_null_observability() -> Result<Observability> {
    // ---
    create_observability(&ObservabilityConfig::null())
}
