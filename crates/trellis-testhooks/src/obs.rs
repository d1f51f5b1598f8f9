//! Structured logging for test lifecycle notifications.
//!
//! Host implementations call the emit functions from their trait
//! methods so every notification leaves one debug-level event,
//! whichever host is compiled in.

use tracing::debug;

use crate::failure::TestFailure;

/// Log-field placeholder for the unnamed-test path.
pub(crate) const UNNAMED: &str = "<unnamed>";

/// Emit event: a test has begun.
pub fn emit_test_started(name: Option<&str>) {
    debug!(event = "test.started", name = name.unwrap_or(UNNAMED));
}

/// Emit event: a test completed successfully.
pub fn emit_test_finished(name: Option<&str>) {
    debug!(event = "test.finished", name = name.unwrap_or(UNNAMED));
}

/// Emit event: a test completed with a failure (diagnostic optional).
pub fn emit_test_failed(name: Option<&str>, failure: Option<&TestFailure>) {
    match failure {
        Some(cause) => debug!(
            event = "test.failed",
            name = name.unwrap_or(UNNAMED),
            failure = %cause,
        ),
        None => debug!(event = "test.failed", name = name.unwrap_or(UNNAMED)),
    }
}

/// RAII guard that enters a span named for the active test.
///
/// Drivers wrap a test's execution in one of these so host-side log
/// lines correlate with the test that produced them.
pub struct TestSpan {
    _span: tracing::span::EnteredSpan,
}

impl TestSpan {
    /// Create and enter a span tagged with the test name.
    pub fn enter(name: Option<&str>) -> Self {
        let span = tracing::debug_span!("trellis.test", name = name.unwrap_or(UNNAMED));
        Self {
            _span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_functions_tolerate_unnamed_tests() {
        // Smoke: no subscriber installed, every path must still be safe.
        emit_test_started(None);
        emit_test_finished(None);
        emit_test_failed(None, None);
        emit_test_failed(Some("t"), Some(&TestFailure::new("cause")));
        let _guard = TestSpan::enter(None);
    }
}
