//! Test lifecycle hooks for Trellis application hosts.
//!
//! Declares the notification surface an application host exposes so an
//! external test driver can announce test boundaries, plus one concrete
//! adapter per supported platform family and an in-memory reference
//! host. The hosting framework owns all state; this crate only forwards
//! events about it.

pub mod failure;
pub mod host;
pub mod obs;
pub mod recording;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
    target_os = "watchos"
))]
mod ns;

#[cfg(any(target_os = "ios", target_os = "tvos", target_os = "watchos"))]
pub mod uikit;

#[cfg(target_os = "macos")]
pub mod appkit;

pub use failure::TestFailure;
pub use host::{TestLifecycleHost, TestNameQuery};
pub use obs::{emit_test_failed, emit_test_finished, emit_test_started, TestSpan};
pub use recording::{RecordedOutcome, RecordingHost};

#[cfg(any(target_os = "ios", target_os = "tvos", target_os = "watchos"))]
pub use uikit::UiKitHost;

#[cfg(target_os = "macos")]
pub use appkit::AppKitHost;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
