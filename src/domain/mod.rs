mod error_reporter;
mod logger;
mod metrics;
mod middleware;
mod profiler;

// Publicly expose the Logger abstraction
pub use logger::{Logger, LoggerPtr};

// Publicly expose the ErrorReporter abstraction and its framework namespaces
pub use error_reporter::{
    ErrorReporter, ErrorReporterPtr, ExpressIntegration, HapiIntegration, HapiPlugin, PackageMeta,
    PluginAttributes,
};

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr, TimerHandle};

// Publicly expose the Profiler abstraction
pub use profiler::{Profiler, ProfilerPtr};

// Publicly expose the framework-free middleware shape
pub use middleware::{Middleware, MiddlewarePtr, Next, Passthrough, RequestContext, ResponseContext};
