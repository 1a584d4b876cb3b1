//! Framework-free middleware abstraction.
//!
//! The error reporter's web-framework integrations are expressed against
//! this minimal shape rather than depending on any framework crate. A
//! real backend adapts its framework-specific handlers to this
//! interface; the inert adapter just forwards to the continuation.

use std::sync::Arc;

/// Continuation signal: invoking it tells the middleware chain to proceed.
pub type Next<'a> = Box<dyn FnOnce() + 'a>;

/// Minimal request-side context handed to middleware.
#[derive(Debug, Default, Clone)]
pub struct RequestContext {
    pub path: String,
    pub method: String,
}

/// Minimal response-side context handed to middleware.
#[derive(Debug, Default, Clone)]
pub struct ResponseContext {
    pub status: Option<u16>,
}

/// A single middleware stage: request context, response context, and an
/// optional continuation to the next stage.
pub trait Middleware: Send + Sync + 'static {
    // ---
    fn handle(
        &self,
        request: &mut RequestContext,
        response: &mut ResponseContext,
        next: Option<Next<'_>>,
    );
}

/// Type alias for any middleware stage.
pub type MiddlewarePtr = Arc<dyn Middleware>;

/// Inert middleware: proceeds down the chain when a continuation is
/// supplied, otherwise does nothing.
pub struct Passthrough;

impl Middleware for Passthrough {
    // ---
    fn handle(
        &self,
        _request: &mut RequestContext,
        _response: &mut ResponseContext,
        next: Option<Next<'_>>,
    ) {
        if let Some(next) = next {
            next();
        }
    }
}
