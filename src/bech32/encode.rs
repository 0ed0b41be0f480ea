//! SegWit address encoder
//!
//! `hrp ‖ "1" ‖ charset(version ‖ base32(program) ‖ checksum)`, always emitted
//! in a single case.

use super::charset::CHARSET;
use super::checksum::create_checksum;
use super::convert::to_base32;
use super::error::{EncodeError, HrpError};
use super::{
    check_program_length, Variant, CHECKSUM_LENGTH, MAX_HRP_LENGTH, MAX_LENGTH,
    MAX_WITNESS_VERSION, SEPARATOR,
};

/// Validate a human-readable part and return its lowercase form
///
/// Accepts 1..=83 characters in ASCII 33..=126, all in one case.
pub fn normalize_hrp(hrp: &str) -> Result<String, HrpError> {
    if hrp.is_empty() {
        return Err(HrpError::Empty);
    }
    if hrp.len() > MAX_HRP_LENGTH {
        return Err(HrpError::TooLong(hrp.len()));
    }

    let mut has_lower = false;
    let mut has_upper = false;
    for c in hrp.chars() {
        if !matches!(c, '!'..='~') {
            return Err(HrpError::InvalidChar(c));
        }
        has_lower |= c.is_ascii_lowercase();
        has_upper |= c.is_ascii_uppercase();
    }
    if has_lower && has_upper {
        return Err(HrpError::MixedCase);
    }

    Ok(hrp.to_ascii_lowercase())
}

/// Encode a witness version and program as a lowercase address
///
/// Uses Bech32 for version 0 and Bech32m for versions 1..=16.
///
/// # Example
/// ```
/// use witness_address::bech32::encode;
///
/// let address = encode("bc", 0, &[0x75, 0x1e, 0x76, 0xe8, 0x19, 0x91, 0x96, 0xd4, 0x54, 0x94,
///     0x1c, 0x45, 0xd1, 0xb3, 0xa3, 0x23, 0xf1, 0x43, 0x3b, 0xd6]).unwrap();
/// assert_eq!(address, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
/// ```
pub fn encode(hrp: &str, version: u8, program: &[u8]) -> Result<String, EncodeError> {
    let hrp = normalize_hrp(hrp)?;
    if version > MAX_WITNESS_VERSION {
        return Err(EncodeError::InvalidWitnessVersion(version));
    }
    check_program_length(version, program.len())?;

    let mut data = Vec::with_capacity(1 + program.len() * 8 / 5 + 1 + CHECKSUM_LENGTH);
    data.push(version);
    data.extend(to_base32(program));

    let total = hrp.len() + 1 + data.len() + CHECKSUM_LENGTH;
    if total > MAX_LENGTH {
        return Err(EncodeError::TooLong(total));
    }

    let checksum = create_checksum(&hrp, &data, Variant::for_witness_version(version));
    data.extend_from_slice(&checksum);

    let mut out = String::with_capacity(total);
    out.push_str(&hrp);
    out.push(SEPARATOR);
    out.extend(data.iter().map(|&symbol| CHARSET[symbol as usize] as char));

    tracing::trace!(
        target: "witness_address::encode",
        hrp = %hrp,
        version,
        program = %hex::encode(program),
        "encoded address"
    );

    Ok(out)
}

/// Encode as an all-uppercase address
///
/// Same checksum as [`encode`]; uppercase is denser in QR codes.
pub fn encode_upper(hrp: &str, version: u8, program: &[u8]) -> Result<String, EncodeError> {
    encode(hrp, version, program).map(|s| s.to_ascii_uppercase())
}
