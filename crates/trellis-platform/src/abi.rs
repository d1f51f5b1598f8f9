//! C-linkage surface of the version gate.
//!
//! The gate is consulted from cross-language contexts inside the
//! hosting framework, so the exported query takes plain scalars rather
//! than a struct. This is the crate's sole ABI surface.

use crate::gate::sdk_at_least;
use crate::platform::{PlatformId, PlatformVersion};

/// C entry point for the version gate.
///
/// `platform` is the loader's numeric family tag and `version` the
/// packed minimum (`major << 16 | minor << 8 | patch`). Returns the
/// same verdict as [`sdk_at_least`] for the equivalent
/// [`PlatformVersion`].
#[no_mangle]
pub extern "C" fn trellis_platform_sdk_at_least(platform: u32, version: u32) -> bool {
    sdk_at_least(PlatformVersion::new(PlatformId(platform), version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abi_agrees_with_rust_entry_point() {
        let cases = [
            (PlatformId::MACOS.0, 0x000D_0000),
            (PlatformId::IOS.0, 0x0011_0200),
            (u32::MAX, u32::MAX),
            (0, 0),
        ];
        for (platform, version) in cases {
            assert_eq!(
                trellis_platform_sdk_at_least(platform, version),
                sdk_at_least(PlatformVersion::new(PlatformId(platform), version)),
            );
        }
    }
}
