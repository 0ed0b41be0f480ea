//! SegWit Address Value Type
//!
//! An [`Address`] is an immutable (hrp, witness version, witness program)
//! triple whose invariants are checked at construction:
//!
//! - hrp: 1..=83 chars in ASCII 33..=126, single case (stored lowercase)
//! - version: 0..=16
//! - program: 20 or 32 bytes for v0, 2..=40 bytes for v1+
//! - the encoded string fits in 90 characters
//!
//! Two ways in:
//! - **Trusted**: [`Address::new`] or the public-key constructors
//! - **Untrusted**: [`Address::decode`], which either returns a fully
//!   validated address or an error, never a partial value
//!
//! The taproot constructors take an already-tweaked output key; computing
//! the tweak is the caller's job.

pub mod hrp;
pub mod witness;

use std::fmt;
use std::str::FromStr;

use secp256k1::{PublicKey, XOnlyPublicKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bech32::{self, DecodeError, Decoded, EncodeError, CHECKSUM_LENGTH, MAX_LENGTH};

pub use hrp::{Hrp, TESTNET_PREFIX};
pub use witness::{AddressType, WitnessVersion};

/// A validated SegWit address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    /// Human-readable part
    hrp: Hrp,
    /// Witness program version
    witness_version: WitnessVersion,
    /// Witness program
    witness_program: Vec<u8>,
}

/// Encoded length for an hrp and program size
fn encoded_len(hrp_len: usize, program_len: usize) -> usize {
    let program_symbols = (program_len * 8 + 4) / 5;
    hrp_len + 1 + 1 + program_symbols + CHECKSUM_LENGTH
}

impl Address {
    /// Initializes an address from a human-readable part, a witness version
    /// and a witness program
    ///
    /// Fails if any field violates its bounds; never produces an address
    /// that cannot be encoded.
    pub fn new(hrp: &str, version: u8, program: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        let hrp = Hrp::parse(hrp)?;
        let witness_version = WitnessVersion::try_from(version)?;
        Self::from_parts(hrp, witness_version, program.into())
    }

    fn from_parts(
        hrp: Hrp,
        witness_version: WitnessVersion,
        witness_program: Vec<u8>,
    ) -> Result<Self, EncodeError> {
        bech32::check_program_length(witness_version.to_u8(), witness_program.len())?;

        let len = encoded_len(hrp.len(), witness_program.len());
        if len > MAX_LENGTH {
            return Err(EncodeError::TooLong(len));
        }

        Ok(Self { hrp, witness_version, witness_program })
    }

    /// Taproot (v1) address for an x-only output key
    ///
    /// Only fails when `hrp` is too long for a 32-byte program to fit in 90
    /// characters (more than 30 characters).
    pub fn from_x_only_public_key(key: &XOnlyPublicKey, hrp: Hrp) -> Result<Self, EncodeError> {
        Self::from_parts(hrp, WitnessVersion::V1, key.serialize().to_vec())
    }

    /// Taproot (v1) address for a public key, using its x-only form
    pub fn from_public_key(key: &PublicKey, hrp: Hrp) -> Result<Self, EncodeError> {
        let (x_only, _parity) = key.x_only_public_key();
        Self::from_x_only_public_key(&x_only, hrp)
    }

    /// Taproot testnet (`tb1p...`) address for a public key
    pub fn create_testnet_from_public_key(key: &PublicKey) -> Self {
        let (x_only, _parity) = key.x_only_public_key();
        // "tb" with a 32-byte program is always 62 characters
        Self {
            hrp: Hrp::testnet(),
            witness_version: WitnessVersion::V1,
            witness_program: x_only.serialize().to_vec(),
        }
    }

    /// Initializes an address from an hrp and raw data symbols
    ///
    /// `data` is the version symbol followed by the 5-bit program symbols,
    /// with the checksum already stripped.
    pub fn from_raw(hrp: &str, data: &[u8]) -> Result<Self, DecodeError> {
        Self::from_decoded(Decoded::from_raw(hrp, data)?)
    }

    fn from_decoded(decoded: Decoded) -> Result<Self, DecodeError> {
        let hrp = Hrp::parse(&decoded.hrp)?;
        // Decoded::from_raw has already bounded the version and program
        let witness_version = WitnessVersion::new(decoded.version)
            .ok_or(DecodeError::InvalidWitnessVersion(decoded.version))?;

        let len = encoded_len(hrp.len(), decoded.program.len());
        if len > MAX_LENGTH {
            return Err(DecodeError::InvalidLength(len));
        }

        Ok(Self { hrp, witness_version, witness_program: decoded.program })
    }

    /// Decodes a SegWit address
    ///
    /// Returns the address together with its (lowercase) hrp.
    pub fn decode(s: &str) -> Result<(Self, String), DecodeError> {
        let decoded = bech32::decode(s)?;
        let hrp = decoded.hrp.clone();
        Ok((Self::from_decoded(decoded)?, hrp))
    }

    /// Decodes a SegWit address and requires its hrp to match `expected`
    pub fn decode_with_hrp(s: &str, expected: &str) -> Result<(Self, String), DecodeError> {
        let decoded = bech32::decode_with_hrp(s, expected)?;
        let hrp = decoded.hrp.clone();
        Ok((Self::from_decoded(decoded)?, hrp))
    }

    /// Determines whether a string makes a valid SegWit address
    pub fn is_valid(s: &str) -> bool {
        Self::decode(s).is_ok()
    }

    /// Determines whether a string makes a valid SegWit address with the
    /// given hrp
    pub fn is_valid_for_hrp(s: &str, hrp: &str) -> bool {
        Self::decode_with_hrp(s, hrp).is_ok()
    }

    pub fn hrp(&self) -> &Hrp {
        &self.hrp
    }

    pub fn witness_version(&self) -> WitnessVersion {
        self.witness_version
    }

    pub fn witness_program(&self) -> &[u8] {
        &self.witness_program
    }

    /// Witness program as lowercase hex
    pub fn program_hex(&self) -> String {
        hex::encode(&self.witness_program)
    }

    /// Standard output type, if any
    pub fn address_type(&self) -> AddressType {
        AddressType::classify(self.witness_version, self.witness_program.len())
    }

    /// The output script: version opcode, push length, program
    pub fn script_pubkey(&self) -> Vec<u8> {
        let mut script = Vec::with_capacity(2 + self.witness_program.len());
        script.push(self.witness_version.opcode());
        script.push(self.witness_program.len() as u8);
        script.extend_from_slice(&self.witness_program);
        script
    }

    /// Encodes the address (lowercase)
    ///
    /// Returns an empty string on failure, which cannot happen for an
    /// address built through the validated constructors.
    pub fn encode(&self) -> String {
        bech32::encode(self.hrp.as_str(), self.witness_version.to_u8(), &self.witness_program)
            .unwrap_or_default()
    }

    /// Encodes the address in uppercase
    pub fn encode_upper(&self) -> String {
        self.encode().to_ascii_uppercase()
    }
}

/// Formats as uppercase if alternate formatting is chosen (`{:#}`)
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.encode_upper())
        } else {
            f.write_str(&self.encode())
        }
    }
}

impl FromStr for Address {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s).map(|(address, _hrp)| address)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
