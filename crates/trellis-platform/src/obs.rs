//! Structured observability for gate evaluations.
//!
//! One trace-level event per evaluation. Trace rather than debug: the
//! gate sits on the framework's feature-negotiation path and may be
//! consulted very often.

use tracing::trace;

use crate::platform::PlatformVersion;

/// Emit event: a gate evaluation completed with a verdict.
///
/// `backend` names the implementation that answered (`"native"` or
/// `"assume"`).
pub fn emit_gate_checked(req: PlatformVersion, verdict: bool, backend: &str) {
    trace!(
        event = "gate.checked",
        platform = req.platform.0,
        version = req.version,
        backend = %backend,
        verdict = verdict,
    );
}
