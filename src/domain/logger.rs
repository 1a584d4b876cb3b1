use serde_json::Value;
use std::sync::Arc;

/// Abstraction for structured, hierarchical application logging.
///
/// Severity methods take a message plus optional structured fields.
/// `child` produces a logger scoped with extra context, the idiom used
/// for per-request or per-job logging.
pub trait Logger: Send + Sync + 'static {
    // ---
    /// Log at TRACE severity.
    fn trace(&self, message: &str, fields: Option<&Value>);

    /// Log at DEBUG severity.
    fn debug(&self, message: &str, fields: Option<&Value>);

    /// Log at INFO severity.
    fn info(&self, message: &str, fields: Option<&Value>);

    /// Log at WARN severity.
    fn warn(&self, message: &str, fields: Option<&Value>);

    /// Log at ERROR severity.
    fn error(&self, message: &str, fields: Option<&Value>);

    /// Log at FATAL severity.
    fn fatal(&self, message: &str, fields: Option<&Value>);

    /// Create a child logger carrying additional bound context.
    fn child(&self, context: Value) -> LoggerPtr;
}

/// Type alias for any backend that implements Logger.
pub type LoggerPtr = Arc<dyn Logger>;
