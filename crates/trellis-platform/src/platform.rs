//! Platform identity and minimum-version values.
//!
//! A [`PlatformVersion`] names an OS family and the packed minimum
//! version a caller requires. It is a plain value: the gate engine in
//! [`crate::gate`] is the only place that interprets it.

use serde::{Deserialize, Serialize};

/// Numeric tag identifying an operating-system family.
///
/// The associated constants cover the loader's known numbering. The set
/// is open: tags outside it are legal inputs and simply mean "platform
/// not present" to the gate; they are never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformId(pub u32);

impl PlatformId {
    pub const MACOS: PlatformId = PlatformId(1);
    pub const IOS: PlatformId = PlatformId(2);
    pub const TVOS: PlatformId = PlatformId(3);
    pub const WATCHOS: PlatformId = PlatformId(4);
    pub const BRIDGEOS: PlatformId = PlatformId(5);
    pub const MAC_CATALYST: PlatformId = PlatformId(6);
    pub const IOS_SIMULATOR: PlatformId = PlatformId(7);
    pub const TVOS_SIMULATOR: PlatformId = PlatformId(8);
    pub const WATCHOS_SIMULATOR: PlatformId = PlatformId(9);
    pub const DRIVERKIT: PlatformId = PlatformId(10);
}

impl std::fmt::Display for PlatformId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PlatformId::MACOS => write!(f, "macos"),
            PlatformId::IOS => write!(f, "ios"),
            PlatformId::TVOS => write!(f, "tvos"),
            PlatformId::WATCHOS => write!(f, "watchos"),
            PlatformId::BRIDGEOS => write!(f, "bridgeos"),
            PlatformId::MAC_CATALYST => write!(f, "mac_catalyst"),
            PlatformId::IOS_SIMULATOR => write!(f, "ios_simulator"),
            PlatformId::TVOS_SIMULATOR => write!(f, "tvos_simulator"),
            PlatformId::WATCHOS_SIMULATOR => write!(f, "watchos_simulator"),
            PlatformId::DRIVERKIT => write!(f, "driverkit"),
            PlatformId(other) => write!(f, "platform({other})"),
        }
    }
}

/// "This OS family at version ≥ X."
///
/// `version` uses the loader's packed encoding:
/// `major << 16 | minor << 8 | patch`. Use [`PlatformVersion::from_parts`]
/// rather than packing by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformVersion {
    /// OS family the requirement applies to.
    pub platform: PlatformId,
    /// Packed minimum version.
    pub version: u32,
}

impl PlatformVersion {
    /// Requirement from an already-packed version number.
    pub fn new(platform: PlatformId, version: u32) -> Self {
        Self { platform, version }
    }

    /// Requirement from unpacked `major.minor.patch` components.
    pub fn from_parts(platform: PlatformId, major: u16, minor: u8, patch: u8) -> Self {
        Self {
            platform,
            version: (u32::from(major) << 16) | (u32::from(minor) << 8) | u32::from(patch),
        }
    }

    /// Major component of the packed version.
    pub fn major(&self) -> u16 {
        (self.version >> 16) as u16
    }

    /// Minor component of the packed version.
    pub fn minor(&self) -> u8 {
        (self.version >> 8) as u8
    }

    /// Patch component of the packed version.
    pub fn patch(&self) -> u8 {
        self.version as u8
    }
}

impl std::fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} >= {}.{}.{}",
            self.platform,
            self.major(),
            self.minor(),
            self.patch()
        )
    }
}
