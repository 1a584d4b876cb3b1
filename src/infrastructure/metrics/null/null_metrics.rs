use crate::domain::{Metrics, TimerHandle};

// Fixed handle returned by `time`; carries no timing data.
const SENTINEL_TIMER: TimerHandle = TimerHandle(1);

/// No-op metrics implementation for hosts with metrics disabled.
///
/// Emission calls are ignored and `time` returns a fixed sentinel
/// handle, so the start-timer/do-work/end-timer idiom needs no
/// branching at call sites.
pub struct NullMetrics;

impl NullMetrics {
    pub fn new() -> Self {
        NullMetrics
    }
}

impl Metrics for NullMetrics {
    // ---
    fn is_active(&self) -> bool {
        false
    }

    fn gauge(&self, _: &str, _: f64, _: &[(&str, &str)]) {}
    fn increment(&self, _: &str, _: u64, _: &[(&str, &str)]) {}
    fn increment_one(&self, _: &str, _: &[(&str, &str)]) {}
    fn histogram(&self, _: &str, _: f64, _: &[(&str, &str)]) {}
    fn flush(&self) {}
    fn set_default_tags(&self, _: &[(&str, &str)]) {}
    fn start_resource_collection(&self) {}

    fn time(&self, _: &str, _: &[(&str, &str)]) -> TimerHandle {
        SENTINEL_TIMER
    }

    fn end_time(&self, _: TimerHandle) {}
    fn callback(&self, _: &str, _: &[(&str, &str)]) {}
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn time_returns_fixed_sentinel() {
        // ---
        let metrics = NullMetrics::new();
        assert_eq!(metrics.time("op", &[]), TimerHandle(1));
        assert_eq!(metrics.time("other", &[("shard", "7")]), TimerHandle(1));
    }

    #[test]
    fn end_time_accepts_any_handle() {
        // ---
        let metrics = NullMetrics::new();
        let handle = metrics.time("op", &[]);
        metrics.end_time(handle);
        metrics.end_time(TimerHandle(42));
    }

    #[test]
    fn emissions_are_inert_and_inactive() {
        // ---
        let metrics = NullMetrics::new();
        assert!(!metrics.is_active());

        metrics.gauge("queue_depth", 12.5, &[("queue", "jobs")]);
        metrics.increment("requests", 3, &[]);
        metrics.increment_one("requests", &[("status", "200")]);
        metrics.histogram("latency_ms", 0.25, &[]);
        metrics.set_default_tags(&[("service", "api")]);
        metrics.start_resource_collection();
        metrics.callback("lazy_value", &[]);
        metrics.flush();

        // Emission operations never flip the activity flag
        assert!(!metrics.is_active());
    }
}
