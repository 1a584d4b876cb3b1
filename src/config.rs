// src/config.rs

//! Observability configuration loaded from environment variables.
//!
//! This module defines the startup-time backend selection for each
//! observability concern. Configuration is validated eagerly and
//! failures are treated as deployment errors rather than recoverable
//! runtime conditions.

use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional backend-selection environment variable.
///
/// If the variable is missing, the null backend is selected so the host
/// runs with inert observability rather than failing. If the variable is
/// present but names an unknown backend, startup fails fast.
macro_rules! backend_env {
    // ---
    ($key:literal) => {
        match std::env::var($key) {
            Ok(value) => value.parse::<Backend>()?,
            Err(_) => Backend::Null,
        }
    };
}

#[cfg(test)]
/// Asserts that configuration loading fails on an unknown backend name.
///
/// This macro is intended for config unit tests only and enforces
/// consistent error messages across failure cases.
macro_rules! assert_unknown_backend {
    // ---
    ($expr:expr, $name:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Unknown observability backend: ", $name)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Backend selection
// ============================================================

/// Selectable backend for a single observability concern.
///
/// The null backend is the only backend this crate ships; hosts wire
/// real backends behind the same traits and extend their own selection
/// logic accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Inert stand-in; absorbs every call.
    Null,
}

impl std::str::FromStr for Backend {
    // ---
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "null" => Ok(Backend::Null),
            other => Err(anyhow::anyhow!("Unknown observability backend: {other}")),
        }
    }
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated observability configuration.
///
/// This is the single source of truth for backend selection. All
/// configuration is validated eagerly during initialization; this
/// function is intended to be called exactly once at startup.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub logger: Backend,
    pub error_reporter: Backend,
    pub metrics: Backend,
    pub profiler: Backend,
}

impl ObservabilityConfig {
    /// Loads and validates backend selection from the environment.
    ///
    /// # Errors
    /// Returns an error if any `OBS_*_BACKEND` variable names an
    /// unknown backend. Missing variables default to `null`.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            logger: backend_env!("OBS_LOGGER_BACKEND"),
            error_reporter: backend_env!("OBS_ERROR_REPORTER_BACKEND"),
            metrics: backend_env!("OBS_METRICS_BACKEND"),
            profiler: backend_env!("OBS_PROFILER_BACKEND"),
        })
    }

    /// Configuration selecting the null backend for every concern.
    pub fn null() -> Self {
        // ---
        Self {
            logger: Backend::Null,
            error_reporter: Backend::Null,
            metrics: Backend::Null,
            profiler: Backend::Null,
        }
    }
}

// ============================================================
// Tests
// ============================================================
