//! Minimum-SDK gate engine.
//!
//! Evaluates a [`PlatformVersion`] requirement against the running
//! environment to produce a single boolean verdict — the answer to "may
//! I use the API introduced in OS version N?". Exactly one
//! implementation is selected at build time ([`DefaultGate`]): the
//! native pass-through on targets whose loader can answer the question,
//! the always-true stub everywhere else.

use crate::obs::emit_gate_checked;
use crate::platform::PlatformVersion;

// ---------------------------------------------------------------------------
// Capability trait
// ---------------------------------------------------------------------------

/// Answers whether the running environment satisfies a minimum-version
/// requirement.
///
/// Total over its input domain: every requirement maps to a definite
/// verdict, unrecognized platform tags included. Implementations hold
/// no mutable state, so repeated identical queries return identical
/// verdicts and calls need no cross-thread coordination.
pub trait VersionGate {
    /// Whether the running environment satisfies `req`.
    fn check(&self, req: PlatformVersion) -> bool;
}

// ---------------------------------------------------------------------------
// Stub gate
// ---------------------------------------------------------------------------

/// Gate for targets with no native SDK-versioning facility.
///
/// Answers `true` unconditionally: where the platform distinguishing
/// feature does not exist there is no notion of "older OS", and the
/// useful default is for downstream feature checks to degrade to
/// "always enabled" rather than "always disabled".
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeAvailable;

impl VersionGate for AssumeAvailable {
    fn check(&self, req: PlatformVersion) -> bool {
        emit_gate_checked(req, true, "assume");
        true
    }
}

// ---------------------------------------------------------------------------
// Native gate
// ---------------------------------------------------------------------------

/// Pass-through gate over the platform's own version-comparison
/// facility.
///
/// The probe's verdict is returned unchanged — no reinterpretation of
/// version numbers, no range validation on the platform tag. On Apple
/// targets [`NativeGate::default`] probes the loader; tests stub the
/// probe via [`NativeGate::with_probe`] to assert pass-through on any
/// target.
#[derive(Debug, Clone, Copy)]
pub struct NativeGate {
    probe: fn(PlatformVersion) -> bool,
}

impl NativeGate {
    /// Gate over an explicit comparison probe.
    pub fn with_probe(probe: fn(PlatformVersion) -> bool) -> Self {
        Self { probe }
    }
}

#[cfg(target_vendor = "apple")]
impl Default for NativeGate {
    fn default() -> Self {
        Self::with_probe(crate::dyld::program_sdk_at_least)
    }
}

impl VersionGate for NativeGate {
    fn check(&self, req: PlatformVersion) -> bool {
        let verdict = (self.probe)(req);
        emit_gate_checked(req, verdict, "native");
        verdict
    }
}

// ---------------------------------------------------------------------------
// Build-time selection
// ---------------------------------------------------------------------------

/// The gate implementation for the current build target.
#[cfg(target_vendor = "apple")]
pub type DefaultGate = NativeGate;

/// The gate implementation for the current build target.
#[cfg(not(target_vendor = "apple"))]
pub type DefaultGate = AssumeAvailable;

/// Whether the running OS/SDK satisfies `req`.
///
/// Canonical in-process entry point; evaluates through [`DefaultGate`].
pub fn sdk_at_least(req: PlatformVersion) -> bool {
    DefaultGate::default().check(req)
}
