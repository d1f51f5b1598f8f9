//! Trellis platform capability shim.
//!
//! Answers a single question for the Trellis UI core: does the running
//! OS/SDK satisfy a minimum version requirement? On targets whose
//! loader can answer natively the verdict is passed through unchanged;
//! everywhere else the gate assumes availability so feature checks
//! degrade to "always enabled".

pub mod abi;
pub mod gate;
pub mod obs;
pub mod platform;
pub mod telemetry;

#[cfg(target_vendor = "apple")]
mod dyld;

pub use gate::{sdk_at_least, AssumeAvailable, DefaultGate, NativeGate, VersionGate};
pub use platform::{PlatformId, PlatformVersion};
pub use telemetry::init_tracing;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
