//! Notification surface a test driver uses against the application host.
//!
//! One concrete host implements this per supported platform family; the
//! driver depends only on the traits. The host owns whatever state the
//! notifications update; nothing here stores anything, and sequencing
//! ("start precedes finish-or-fail for the same name") is the driver's
//! responsibility.

use crate::failure::TestFailure;

/// Lifecycle notifications an application host accepts from an external
/// test driver.
///
/// All three operations are fire-and-forget: no return value, no error
/// channel. `name` is `None` for the unnamed-test path. Calls arrive on
/// whatever thread the driver uses (by convention the host platform's
/// main thread); any locking the host needs is its own.
pub trait TestLifecycleHost {
    /// A test identified by `name` (or unnamed) has begun.
    fn started_test(&self, name: Option<&str>);

    /// The named test completed successfully.
    fn finished_test(&self, name: Option<&str>);

    /// The named test completed with a failure. `failure` may be absent
    /// when no structured cause is available.
    fn failed_test(&self, name: Option<&str>, failure: Option<TestFailure>);
}

/// Active-test query, on host families that expose one.
///
/// The desktop-family host does not implement this; the asymmetry is
/// deliberate and kept visible in the type system rather than hidden
/// behind a conditionally-compiled method.
pub trait TestNameQuery: TestLifecycleHost {
    /// Name of the currently active test, or `None` when no test is
    /// running (or the active test is unnamed). Read-only.
    fn current_test_name(&self) -> Option<String>;
}
