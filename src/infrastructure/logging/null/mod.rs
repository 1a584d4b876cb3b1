// src/infrastructure/logging/null/mod.rs
mod null_logger;

pub use null_logger::NullLogger;

/// Creates the shared no-op logger.
///
/// All severity calls are ignored and `child` returns the same shared
/// instance, so code calling `logger.info(...)` or
/// `logger.child(...).warn(...)` behaves identically whether or not a
/// real backend is configured.
///
/// Returns a fully initialized logger instance ready for use.
pub fn create() -> anyhow::Result<crate::domain::LoggerPtr> {
    Ok(NullLogger::shared())
}
