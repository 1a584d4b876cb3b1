use super::middleware::{MiddlewarePtr, Next, RequestContext, ResponseContext};
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::sync::Arc;

/// Abstraction for error capture and reporting.
///
/// `is_active` lets callers branch on whether a real reporting backend
/// is configured before doing capture work. The two framework
/// integrations expose the registration shapes those ecosystems'
/// plugin loaders expect, so host middleware wiring is identical with
/// or without a real backend.
pub trait ErrorReporter: Send + Sync + 'static {
    // ---
    /// Whether a real reporting backend is configured.
    fn is_active(&self) -> bool;

    /// Capture an error for reporting.
    fn capture_exception(&self, error: &(dyn Error + 'static), fields: Option<&Value>);

    /// Capture a free-form message for reporting.
    fn capture_message(&self, message: &str, fields: Option<&Value>);

    /// Install process-global capture hooks.
    fn patch_global(&self);

    /// Hapi-family plugin integration.
    fn hapi(&self) -> &HapiIntegration;

    /// Express-family middleware integration.
    fn express(&self) -> &ExpressIntegration;
}

/// Type alias for any backend that implements ErrorReporter.
pub type ErrorReporterPtr = Arc<dyn ErrorReporter>;

/// Package identity advertised through plugin registration points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageMeta {
    pub name: &'static str,
    pub version: &'static str,
}

impl PackageMeta {
    /// Identity of this crate, taken from Cargo metadata.
    pub fn current() -> Self {
        // ---
        PackageMeta {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Metadata block attached to the registration entry point itself.
///
/// Some plugin-loader versions read identity from the plugin object,
/// others from attributes on the registration callable. Both attachment
/// points are kept and must agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginAttributes {
    pub pkg: PackageMeta,
}

/// Hapi-family plugin surface: a registration middleware plus package
/// identity at both loader-visible attachment points.
pub struct HapiPlugin {
    middleware: MiddlewarePtr,
    pkg: PackageMeta,
}

impl HapiPlugin {
    // ---
    pub fn new(middleware: MiddlewarePtr, pkg: PackageMeta) -> Self {
        HapiPlugin { middleware, pkg }
    }

    /// Registration entry point inspected by the plugin loader.
    ///
    /// If a continuation is supplied it is invoked synchronously so the
    /// plugin chain proceeds.
    pub fn register(
        &self,
        request: &mut RequestContext,
        response: &mut ResponseContext,
        next: Option<Next<'_>>,
    ) {
        self.middleware.handle(request, response, next)
    }

    /// Package identity on the plugin object.
    pub fn pkg(&self) -> PackageMeta {
        self.pkg
    }

    /// Package identity attached to the registration entry point.
    pub fn attributes(&self) -> PluginAttributes {
        PluginAttributes { pkg: self.pkg }
    }
}

/// Hapi-shaped integration namespace.
pub struct HapiIntegration {
    pub plugin: HapiPlugin,
}

/// Express-shaped integration namespace: request-side and error-side
/// middleware, both the same three-argument pass-through shape.
pub struct ExpressIntegration {
    request: MiddlewarePtr,
    error: MiddlewarePtr,
}

impl ExpressIntegration {
    // ---
    pub fn new(request: MiddlewarePtr, error: MiddlewarePtr) -> Self {
        ExpressIntegration { request, error }
    }

    /// Request-side middleware stage.
    pub fn request_handler(
        &self,
        request: &mut RequestContext,
        response: &mut ResponseContext,
        next: Option<Next<'_>>,
    ) {
        self.request.handle(request, response, next)
    }

    /// Error-side middleware stage.
    pub fn error_handler(
        &self,
        request: &mut RequestContext,
        response: &mut ResponseContext,
        next: Option<Next<'_>>,
    ) {
        self.error.handle(request, response, next)
    }
}
