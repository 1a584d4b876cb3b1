use std::sync::Arc;

/// Abstraction for process profiling lifecycle hooks.
pub trait Profiler: Send + Sync + 'static {
    // ---
    /// Install process signal listeners that trigger heap snapshots.
    fn setup_process_listener(&self);

    /// Request a debounced heap snapshot tagged with `label`.
    fn create_debounced_snapshot(&self, label: &str);

    /// Report collected profiling data.
    fn report(&self);

    /// Install garbage-collection reporting hooks.
    fn setup_gc_reporter(&self);
}

/// Type alias for any backend that implements Profiler.
pub type ProfilerPtr = Arc<dyn Profiler>;
