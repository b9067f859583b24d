//! Logging infrastructure for the column filter.
//!
//! Events go through `tracing` with the single target
//! `tonbo_column_filter` and always carry an `event` field for filtering.
//!
//! ## Library Integration
//!
//! This crate never initializes a global subscriber. Applications configure
//! tracing via `tracing_subscriber` or similar.
//!
//! ## Conventions
//!
//! - `event`: snake_case event name (required)
//! - `component`: module/subsystem (e.g., "codec", "scan")
//! - Use `%` for Display, `?` for Debug formatting
//! - Nothing is logged per cell; the hottest event is the per-row verdict at trace

/// Target for all filter log events.
pub(crate) const FILTER_TARGET: &str = "tonbo_column_filter";

/// Macro for debug-level log events.
///
/// # Example
/// ```ignore
/// log_debug!(
///     component = "codec",
///     event = "predicate_decode_failed",
///     error = %err,
/// );
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::FILTER_TARGET, $($field)*)
    };
}

/// Macro for trace-level log events.
macro_rules! log_trace {
    ($($field:tt)*) => {
        ::tracing::trace!(target: $crate::observability::FILTER_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_trace;
