use std::sync::Arc;

/// Handle returned by [`Metrics::time`] and consumed by
/// [`Metrics::end_time`].
///
/// Inert backends hand back a fixed sentinel so the
/// start-timer/do-work/end-timer idiom holds without branching on
/// whether metrics are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(pub u64);

/// Abstraction for application metrics (gauges, counters, histograms, timers).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Whether a real metrics backend is configured.
    fn is_active(&self) -> bool;

    /// Record an instantaneous value.
    fn gauge(&self, name: &str, value: f64, tags: &[(&str, &str)]);

    /// Increment a counter by `delta`.
    fn increment(&self, name: &str, delta: u64, tags: &[(&str, &str)]);

    /// Increment a counter by one.
    fn increment_one(&self, name: &str, tags: &[(&str, &str)]);

    /// Record a value into a distribution.
    fn histogram(&self, name: &str, value: f64, tags: &[(&str, &str)]);

    /// Push any buffered measurements to the backend.
    fn flush(&self);

    /// Set tags applied to every subsequent emission.
    fn set_default_tags(&self, tags: &[(&str, &str)]);

    /// Begin periodic collection of process resource metrics.
    fn start_resource_collection(&self);

    /// Start a timer for the named operation.
    fn time(&self, name: &str, tags: &[(&str, &str)]) -> TimerHandle;

    /// Stop a timer previously returned by [`Metrics::time`].
    fn end_time(&self, handle: TimerHandle);

    /// Record a deferred measurement under the given name.
    fn callback(&self, name: &str, tags: &[(&str, &str)]);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
