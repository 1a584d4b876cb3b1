use crate::domain::Profiler;

/// No-op profiler for hosts with profiling disabled.
///
/// Lifecycle hooks succeed without installing any listener or writing
/// any snapshot.
pub struct NullProfiler;

impl NullProfiler {
    pub fn new() -> Self {
        NullProfiler
    }
}

impl Profiler for NullProfiler {
    // ---
    fn setup_process_listener(&self) {}
    fn create_debounced_snapshot(&self, _: &str) {}
    fn report(&self) {}
    fn setup_gc_reporter(&self) {}
}
