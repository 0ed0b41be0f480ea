//! Bech32 / Bech32m codec for SegWit addresses
//!
//! - BIP-173: Bech32, used for witness version 0
//! - BIP-350: Bech32m, used for witness versions 1 through 16
//!
//! Encoding: program bytes -> 5-bit symbols -> checksum -> string.
//! Decoding: string -> symbols -> checksum verify -> program bytes.
//!
//! All functions are pure and allocation-bounded by the 90 character limit.

pub mod charset;
pub mod checksum;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;

pub use decode::{decode, decode_with_hrp, is_valid, is_valid_for_hrp, Decoded};
pub use encode::{encode, encode_upper};
pub use error::{
    ConversionError, DecodeError, EncodeError, ErrorCategory, HrpError, ProgramLengthError,
};

/// Separator between the human-readable part and the data part
pub const SEPARATOR: char = '1';

/// Number of checksum symbols
pub const CHECKSUM_LENGTH: usize = 6;

/// Minimum total length of an encoded address
pub const MIN_LENGTH: usize = 8;

/// Maximum total length of an encoded address
pub const MAX_LENGTH: usize = 90;

/// Maximum length of the human-readable part
pub const MAX_HRP_LENGTH: usize = 83;

/// Highest witness version
pub const MAX_WITNESS_VERSION: u8 = 16;

/// Minimum witness program size in bytes
pub const MIN_PROGRAM_SIZE: usize = 2;

/// Maximum witness program size in bytes
pub const MAX_PROGRAM_SIZE: usize = 40;

/// Checksum variant
///
/// Bech32 and Bech32m differ only in the constant the final remainder is
/// XOR'd with. A checksum built for one variant never verifies under the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// BIP-173, witness version 0
    Bech32,
    /// BIP-350, witness versions 1..=16
    Bech32m,
}

impl Variant {
    /// XOR constant for this variant
    pub const fn constant(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc8_30a3,
        }
    }

    /// Variant required for a witness version
    pub const fn for_witness_version(version: u8) -> Self {
        if version == 0 {
            Variant::Bech32
        } else {
            Variant::Bech32m
        }
    }
}

/// Check a witness program length against its version
///
/// Used by both the encoder and the decoder.
pub fn check_program_length(version: u8, len: usize) -> Result<(), ProgramLengthError> {
    if !(MIN_PROGRAM_SIZE..=MAX_PROGRAM_SIZE).contains(&len) {
        return Err(ProgramLengthError::InvalidLength(len));
    }
    // v0 is P2WPKH (20) or P2WSH (32)
    if version == 0 && len != 20 && len != 32 {
        return Err(ProgramLengthError::InvalidSegwitV0Length(len));
    }
    Ok(())
}
