//! Loader binding for program-SDK version queries.
//!
//! The loader compares a `(platform, packed version)` pair against the
//! SDK the running program was built for. Total for all inputs: a tag
//! the loader does not recognize yields its own verdict, which is
//! passed through unchanged.

use crate::platform::PlatformVersion;

#[repr(C)]
#[allow(non_camel_case_types)]
struct dyld_build_version_t {
    platform: u32,
    version: u32,
}

extern "C" {
    fn dyld_program_sdk_at_least(version: dyld_build_version_t) -> bool;
}

/// Default probe for [`crate::gate::NativeGate`] on Apple targets.
pub(crate) fn program_sdk_at_least(req: PlatformVersion) -> bool {
    let version = dyld_build_version_t {
        platform: req.platform.0,
        version: req.version,
    };
    // SAFETY: by-value call into libSystem; no pointers, no invariants
    // beyond the struct layout matching the loader's declaration.
    unsafe { dyld_program_sdk_at_least(version) }
}
