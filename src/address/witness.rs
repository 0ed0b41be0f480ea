//! Witness version and output type classification (BIP-141)

use std::fmt;

use serde::Serialize;

use crate::bech32::{EncodeError, Variant, MAX_WITNESS_VERSION};

/// SegWit version, 0..=16
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WitnessVersion(u8);

impl WitnessVersion {
    pub const V0: WitnessVersion = WitnessVersion(0);
    pub const V1: WitnessVersion = WitnessVersion(1);

    /// Returns `None` for versions above 16
    pub const fn new(version: u8) -> Option<Self> {
        if version <= MAX_WITNESS_VERSION {
            Some(Self(version))
        } else {
            None
        }
    }

    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// Checksum variant for this version
    pub const fn variant(self) -> Variant {
        Variant::for_witness_version(self.0)
    }

    /// Script opcode pushing this version (`OP_0`, `OP_1`..`OP_16`)
    pub const fn opcode(self) -> u8 {
        if self.0 == 0 {
            0x00
        } else {
            0x50 + self.0
        }
    }
}

impl TryFrom<u8> for WitnessVersion {
    type Error = EncodeError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        Self::new(version).ok_or(EncodeError::InvalidWitnessVersion(version))
    }
}

impl From<WitnessVersion> for u8 {
    fn from(version: WitnessVersion) -> Self {
        version.0
    }
}

impl fmt::Display for WitnessVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standard output types carried by a SegWit address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    /// Native SegWit v0, 20-byte key hash (bc1q / tb1q)
    P2wpkh,
    /// Native SegWit v0, 32-byte script hash
    P2wsh,
    /// Taproot, v1 with a 32-byte output key (bc1p / tb1p)
    P2tr,
    /// Any other version/length combination
    Unknown,
}

impl AddressType {
    pub fn classify(version: WitnessVersion, program_len: usize) -> Self {
        match (version.to_u8(), program_len) {
            (0, 20) => AddressType::P2wpkh,
            (0, 32) => AddressType::P2wsh,
            (1, 32) => AddressType::P2tr,
            _ => AddressType::Unknown,
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            AddressType::P2wpkh => "p2wpkh",
            AddressType::P2wsh => "p2wsh",
            AddressType::P2tr => "p2tr",
            AddressType::Unknown => "unknown",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_bounds() {
        assert_eq!(WitnessVersion::new(16).map(u8::from), Some(16));
        assert!(WitnessVersion::new(17).is_none());
        assert_eq!(WitnessVersion::try_from(17), Err(EncodeError::InvalidWitnessVersion(17)));
    }

    #[test]
    fn test_opcodes() {
        assert_eq!(WitnessVersion::V0.opcode(), 0x00);
        assert_eq!(WitnessVersion::V1.opcode(), 0x51);
        assert_eq!(WitnessVersion::new(16).unwrap().opcode(), 0x60);
    }

    #[test]
    fn test_classify() {
        assert_eq!(AddressType::classify(WitnessVersion::V0, 20), AddressType::P2wpkh);
        assert_eq!(AddressType::classify(WitnessVersion::V0, 32), AddressType::P2wsh);
        assert_eq!(AddressType::classify(WitnessVersion::V1, 32), AddressType::P2tr);
        assert_eq!(AddressType::classify(WitnessVersion::V1, 2), AddressType::Unknown);
        assert_eq!(AddressType::P2tr.to_string(), "p2tr");
    }
}
