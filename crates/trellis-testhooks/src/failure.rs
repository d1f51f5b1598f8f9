//! Failure diagnostic attached to a failed test.

use serde::{Deserialize, Serialize};

/// Opaque diagnostic describing why a test failed.
///
/// Carried as data on [`failed_test`]; the notification surface itself
/// has no error channel. The optional code and domain mirror the
/// structured error values native hosts forward; both stay absent when
/// the driver only has a message (or nothing) to report.
///
/// [`failed_test`]: crate::host::TestLifecycleHost::failed_test
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct TestFailure {
    /// Human-readable description.
    pub message: String,
    /// Numeric code, when the source error carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Originating error domain, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl TestFailure {
    /// Diagnostic with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            domain: None,
        }
    }

    /// Attach a numeric code.
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach an originating domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let failure = TestFailure::new("assertion failed: view tree empty");
        assert_eq!(failure.to_string(), "assertion failed: view tree empty");
    }

    #[test]
    fn test_builder_attaches_code_and_domain() {
        let failure = TestFailure::new("timeout")
            .with_code(-1001)
            .with_domain("TrellisURLError");
        assert_eq!(failure.code, Some(-1001));
        assert_eq!(failure.domain.as_deref(), Some("TrellisURLError"));
    }

    #[test]
    fn test_serde_omits_absent_fields() {
        let bare = TestFailure::new("boom");
        let json = serde_json::to_string(&bare).unwrap();
        assert_eq!(json, r#"{"message":"boom"}"#);

        let back: TestFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(bare, back);
    }
}
