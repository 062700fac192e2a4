//! Logging setup for template rendering.
//!
//! The renderer emits structured `tracing` events; this module installs a
//! subscriber for applications that do not bring their own. It is controlled
//! by environment variables shared with the rest of Prax.
//!
//! # Environment Variables
//!
//! - `PRAX_DEBUG=true|1|yes` - Enable debug logging
//! - `PRAX_LOG_LEVEL=trace|debug|info|warn|error` - Set specific log level
//! - `PRAX_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! ```rust,no_run
//! use prax_template::logging;
//!
//! // Call once at startup
//! logging::init();
//! ```
//!
//! Rendered SQL is never logged, only its shape (fragment count, argument
//! count, output length), since bound values may carry user data.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `PRAX_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("PRAX_DEBUG")
        .map(|v| parse_debug_flag(&v))
        .unwrap_or(false)
}

fn parse_debug_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Get the configured log level from `PRAX_LOG_LEVEL`.
///
/// Defaults to "debug" if `PRAX_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    resolve_log_level(env::var("PRAX_LOG_LEVEL").ok().as_deref(), is_debug_enabled())
}

fn resolve_log_level(level: Option<&str>, debug: bool) -> &'static str {
    let fallback = if debug { "debug" } else { "warn" };
    match level.map(str::to_lowercase).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => fallback,
    }
}

/// Get the configured log format from `PRAX_LOG_FORMAT`.
///
/// Defaults to "json".
pub fn get_log_format() -> &'static str {
    resolve_log_format(env::var("PRAX_LOG_FORMAT").ok().as_deref())
}

fn resolve_log_format(format: Option<&str>) -> &'static str {
    match format.map(str::to_lowercase).as_deref() {
        Some("pretty") => "pretty",
        Some("compact") => "compact",
        _ => "json",
    }
}

/// Initialize logging. Subsequent calls are no-ops.
///
/// Does nothing unless `PRAX_DEBUG` or `PRAX_LOG_LEVEL` is set, or when the
/// `tracing-subscriber` feature is disabled.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("PRAX_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!(
                "prax_template={},prax_sanitize={}",
                level, level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            match get_log_format() {
                "json" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().json())
                        .init();
                }
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().compact())
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().pretty())
                        .init();
                }
            }

            tracing::info!(
                level = level,
                format = get_log_format(),
                "Prax template logging initialized"
            );
        }
    });
}

/// Initialize logging with a specific level.
///
/// # Safety
///
/// This function modifies environment variables, which is unsafe in
/// multi-threaded programs. Call it before spawning threads.
pub fn init_with_level(level: &str) {
    // SAFETY: only called at program startup before threads are spawned.
    unsafe {
        env::set_var("PRAX_LOG_LEVEL", level);
    }
    init();
}

/// Initialize debug logging; equivalent to `PRAX_DEBUG=true` plus [`init`].
///
/// # Safety
///
/// Same constraints as [`init_with_level`].
pub fn init_debug() {
    // SAFETY: only called at program startup before threads are spawned.
    unsafe {
        env::set_var("PRAX_DEBUG", "true");
    }
    init();
}
