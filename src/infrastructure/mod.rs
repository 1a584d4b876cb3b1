pub mod error_reporting;
pub mod logging;
pub mod metrics;
pub mod profiling;

// Re-export the factory functions for easy access
pub use error_reporting::create_null_error_reporter;
pub use logging::create_null_logger;
pub use metrics::create_null_metrics;
pub use profiling::create_null_profiler;
