//! Observability registry.
//!
//! This module defines the shared registry handed to a host
//! application's dependency-wiring step. The `Observability` struct
//! holds one implementation per concern (logging, error reporting,
//! metrics, profiling) behind the domain traits.
//!
//! The registry is designed to be cheaply cloneable (all fields are
//! `Arc` trait objects) so it can be passed to any number of consumers
//! without copying resources.

use crate::domain::{ErrorReporterPtr, LoggerPtr, MetricsPtr, ProfilerPtr};

/// Shared observability registry injected into host components.
///
/// # Design Principles
///
/// - **Dependency Inversion**: Consumers depend on abstractions
///   (Logger, ErrorReporter, Metrics, Profiler traits), not concrete
///   backends.
/// - **Immutable After Initialization**: Built once at startup and
///   never mutated. No operation on any field changes observable state.
/// - **Cheap Cloning**: Every field is an `Arc` trait object, making
///   the struct efficiently cloneable and safe to share across threads.
///
/// # Lifecycle
///
/// 1. Created once by [`crate::create_observability`] (or
///    [`crate::create_null_observability`]) during application startup
/// 2. Injected into consumers by parameter passing
/// 3. Cloned freely; all clones share the same backends
#[derive(Clone)]
pub struct Observability {
    /// Logger implementation, null or host-supplied.
    logger: LoggerPtr,

    /// Error reporter implementation, null or host-supplied.
    error_reporter: ErrorReporterPtr,

    /// Metrics implementation, null or host-supplied.
    metrics: MetricsPtr,

    /// Profiler implementation, null or host-supplied.
    profiler: ProfilerPtr,
}

impl Observability {
    // ---

    pub fn new(
        logger: LoggerPtr,
        error_reporter: ErrorReporterPtr,
        metrics: MetricsPtr,
        profiler: ProfilerPtr,
    ) -> Self {
        // ---
        Observability {
            logger,
            error_reporter,
            metrics,
            profiler,
        }
    }

    /// Get a reference to the logger implementation.
    pub fn logger(&self) -> &LoggerPtr {
        // ---
        &self.logger
    }

    /// Get a reference to the error reporter implementation.
    pub fn error_reporter(&self) -> &ErrorReporterPtr {
        // ---
        &self.error_reporter
    }

    /// Get a reference to the metrics implementation.
    pub fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }

    /// Get a reference to the profiler implementation.
    pub fn profiler(&self) -> &ProfilerPtr {
        // ---
        &self.profiler
    }
}
