// src/infrastructure/metrics/null/mod.rs
mod null_metrics;

pub use null_metrics::NullMetrics;
use std::sync::Arc;

/// Creates a new no-op metrics implementation.
///
/// This implementation does nothing - all metrics calls are ignored and
/// timers return a fixed sentinel handle. Useful for development,
/// testing, or when metrics are disabled.
///
/// Returns a fully initialized metrics instance ready for use.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    Ok(Arc::new(NullMetrics::new()))
}
