use crate::domain::{
    ErrorReporter, ExpressIntegration, HapiIntegration, HapiPlugin, MiddlewarePtr, PackageMeta,
    Passthrough,
};
use serde_json::Value;
use std::error::Error;
use std::sync::Arc;

/// No-op error reporter for hosts with error tracking disabled.
///
/// `is_active` stays `false` so callers can branch before doing capture
/// work. Both framework integrations are wired with the inert
/// pass-through middleware, so plugin registration succeeds and the
/// middleware chain proceeds without anything being captured.
pub struct NullErrorReporter {
    hapi: HapiIntegration,
    express: ExpressIntegration,
}

impl NullErrorReporter {
    pub fn new() -> Self {
        // ---
        let middleware: MiddlewarePtr = Arc::new(Passthrough);
        NullErrorReporter {
            hapi: HapiIntegration {
                plugin: HapiPlugin::new(middleware.clone(), PackageMeta::current()),
            },
            express: ExpressIntegration::new(middleware.clone(), middleware),
        }
    }
}

impl ErrorReporter for NullErrorReporter {
    // ---
    fn is_active(&self) -> bool {
        false
    }

    fn capture_exception(&self, _: &(dyn Error + 'static), _: Option<&Value>) {}

    fn capture_message(&self, _: &str, _: Option<&Value>) {}

    fn patch_global(&self) {}

    fn hapi(&self) -> &HapiIntegration {
        &self.hapi
    }

    fn express(&self) -> &ExpressIntegration {
        &self.express
    }
}
