use crate::domain::{Logger, LoggerPtr};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::Arc;

// One shared instance; `child` hands this back so nesting is free.
static SHARED: Lazy<LoggerPtr> = Lazy::new(|| Arc::new(NullLogger));

/// No-op logger for hosts with logging disabled.
///
/// Every severity call is ignored. `child` discards its context and
/// returns the same shared instance, so scoped logging works at any
/// nesting depth without tracking anything.
pub struct NullLogger;

impl NullLogger {
    /// Handle to the process-wide shared instance.
    pub fn shared() -> LoggerPtr {
        SHARED.clone()
    }
}

impl Logger for NullLogger {
    // ---
    fn trace(&self, _: &str, _: Option<&Value>) {}
    fn debug(&self, _: &str, _: Option<&Value>) {}
    fn info(&self, _: &str, _: Option<&Value>) {}
    fn warn(&self, _: &str, _: Option<&Value>) {}
    fn error(&self, _: &str, _: Option<&Value>) {}
    fn fatal(&self, _: &str, _: Option<&Value>) {}

    fn child(&self, _context: Value) -> LoggerPtr {
        NullLogger::shared()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_calls_are_inert() {
        // ---
        let logger = NullLogger::shared();
        logger.trace("t", None);
        logger.debug("d", Some(&json!({"k": "v"})));
        logger.info("i", Some(&json!([1, 2, 3])));
        logger.warn("w", Some(&json!(null)));
        logger.error("e", None);
        logger.fatal("f", Some(&json!({"nested": {"deep": true}})));
    }

    #[test]
    fn child_returns_the_shared_instance() {
        // ---
        let logger = NullLogger::shared();
        let child = logger.child(json!({"req": "id"}));
        assert!(Arc::ptr_eq(&child, &NullLogger::shared()));
    }

    #[test]
    fn child_nests_arbitrarily_deep() {
        // ---
        let logger = NullLogger::shared();
        logger
            .child(json!({"a": 1}))
            .child(json!({"b": 2}))
            .child(json!({"c": 3}))
            .info("hello", Some(&json!({"a": 1})));
    }
}
