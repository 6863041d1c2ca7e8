//! Logging and debugging facilities for Inkbar.
//!
//! This module provides:
//! - Integration with the `tracing` crate for structured logging
//! - Performance tracing hooks for profiling rebuild and layout passes
//!
//! # Tracing Integration
//!
//! Inkbar uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "inkbar_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "inkbar_core::signal";
    /// Toolbar rebuild target.
    pub const TOOLBAR: &str = "inkbar::toolbar";
    /// Layout computation target.
    pub const LAYOUT: &str = "inkbar::layout";
    /// Action dispatch target.
    pub const DISPATCH: &str = "inkbar::dispatch";
}

/// A guard that emits a tracing span when dropped.
///
/// This is useful for tracking the duration of operations such as toolbar
/// rebuilds and layout passes.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "inkbar::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        // Just ensure it compiles and doesn't panic
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_perf_span_emits_under_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _span = PerfSpan::new("layout");
            tracing::trace!(target: targets::LAYOUT, "inside perf span");
        });
    }

    #[test]
    fn test_targets_are_distinct() {
        let all = [
            targets::CORE,
            targets::SIGNAL,
            targets::TOOLBAR,
            targets::LAYOUT,
            targets::DISPATCH,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
