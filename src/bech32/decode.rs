//! SegWit address decoder
//!
//! Validation is fail-fast; the first failing check determines the error:
//!
//! 1. total length 8..=90
//! 2. single case (the string is lowercased afterwards)
//! 3. last `1` separates a non-empty hrp from at least 6 data symbols
//! 4. hrp characters in ASCII 33..=126
//! 5. data characters in the alphabet
//! 6. a version symbol is present and is <= 16
//! 7. checksum verifies under the version's variant
//! 8. program symbols regroup to bytes with zero padding
//! 9. program length fits the version

use super::charset::from_char;
use super::checksum::verify_checksum;
use super::convert::from_base32;
use super::error::DecodeError;
use super::{
    check_program_length, Variant, CHECKSUM_LENGTH, MAX_LENGTH, MAX_WITNESS_VERSION, MIN_LENGTH,
    SEPARATOR,
};

/// A successfully decoded address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decoded {
    /// Human-readable part, lowercase
    pub hrp: String,
    /// Witness version (0..=16)
    pub version: u8,
    /// Witness program bytes
    pub program: Vec<u8>,
}

impl Decoded {
    /// Build from an hrp and the data symbols with the checksum stripped
    ///
    /// `data[0]` is the witness version symbol; the rest are 5-bit program
    /// symbols. Performs steps 6, 8 and 9 of decoding.
    pub fn from_raw(hrp: &str, data: &[u8]) -> Result<Self, DecodeError> {
        let (&version, program_symbols) = data.split_first().ok_or(DecodeError::EmptyData)?;
        if version > MAX_WITNESS_VERSION {
            return Err(DecodeError::InvalidWitnessVersion(version));
        }

        let program = from_base32(program_symbols)?;
        check_program_length(version, program.len())?;

        Ok(Self { hrp: hrp.to_ascii_lowercase(), version, program })
    }

    /// Checksum variant this address was encoded with
    pub fn variant(&self) -> Variant {
        Variant::for_witness_version(self.version)
    }
}

/// Decode a SegWit address
///
/// Accepts all-lowercase or all-uppercase input. The returned hrp is
/// lowercase.
pub fn decode(s: &str) -> Result<Decoded, DecodeError> {
    let result = decode_inner(s);
    if let Err(ref err) = result {
        tracing::debug!(
            target: "witness_address::decode",
            code = err.error_code(),
            error = %err,
            "rejected address"
        );
    }
    result
}

/// Decode a SegWit address and require a specific hrp
///
/// `expected` is compared case-insensitively.
pub fn decode_with_hrp(s: &str, expected: &str) -> Result<Decoded, DecodeError> {
    let decoded = decode(s)?;
    if !decoded.hrp.eq_ignore_ascii_case(expected) {
        let err = DecodeError::HrpMismatch {
            expected: expected.to_ascii_lowercase(),
            actual: decoded.hrp,
        };
        tracing::debug!(target: "witness_address::decode", code = err.error_code(), error = %err, "rejected address");
        return Err(err);
    }
    Ok(decoded)
}

/// Whether `s` is a valid SegWit address
pub fn is_valid(s: &str) -> bool {
    decode(s).is_ok()
}

/// Whether `s` is a valid SegWit address with the given hrp
pub fn is_valid_for_hrp(s: &str, expected: &str) -> bool {
    decode_with_hrp(s, expected).is_ok()
}

fn decode_inner(s: &str) -> Result<Decoded, DecodeError> {
    // 1. length
    if s.len() < MIN_LENGTH || s.len() > MAX_LENGTH {
        return Err(DecodeError::InvalidLength(s.len()));
    }

    // 2. case
    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(DecodeError::MixedCase);
    }
    let s = s.to_ascii_lowercase();

    // 3. separator
    let pos = s.rfind(SEPARATOR).ok_or(DecodeError::MissingSeparator)?;
    if pos == 0 {
        return Err(DecodeError::EmptyHrp);
    }
    let (hrp, data_part) = (&s[..pos], &s[pos + 1..]);
    if data_part.len() < CHECKSUM_LENGTH {
        return Err(DecodeError::ChecksumTooShort);
    }

    // 4. hrp characters
    if let Some(c) = hrp.chars().find(|c| !matches!(c, '!'..='~')) {
        return Err(DecodeError::InvalidHrpChar(c));
    }

    // 5. data characters
    let data = data_part
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            from_char(ch).ok_or(DecodeError::InvalidDataChar { ch, position: pos + 1 + i })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    // 6. version
    let payload_len = data.len() - CHECKSUM_LENGTH;
    let version = *data[..payload_len].first().ok_or(DecodeError::EmptyData)?;
    if version > MAX_WITNESS_VERSION {
        return Err(DecodeError::InvalidWitnessVersion(version));
    }

    // 7. checksum
    if !verify_checksum(hrp, &data, Variant::for_witness_version(version)) {
        return Err(DecodeError::InvalidChecksum);
    }

    // 8-9. program
    Decoded::from_raw(hrp, &data[..payload_len])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bech32::ConversionError;

    #[test]
    fn test_decode_p2wpkh_uppercase() {
        let decoded = decode("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4").unwrap();
        assert_eq!(decoded.hrp, "bc");
        assert_eq!(decoded.version, 0);
        assert_eq!(hex::encode(&decoded.program), "751e76e8199196d454941c45d1b3a323f1433bd6");
        assert_eq!(decoded.variant(), Variant::Bech32);
    }

    #[test]
    fn test_decode_taproot() {
        let decoded =
            decode("bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqzk5jj0").unwrap();
        assert_eq!(decoded.version, 1);
        assert_eq!(
            hex::encode(&decoded.program),
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert_eq!(decoded.variant(), Variant::Bech32m);
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(decode("bc1qqqq"), Err(DecodeError::InvalidLength(7)));
        let long = format!("bc1{}", "q".repeat(88));
        assert_eq!(decode(&long), Err(DecodeError::InvalidLength(91)));
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(
            decode("tb1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vq47Zagq"),
            Err(DecodeError::MixedCase)
        );
    }

    #[test]
    fn test_separator_rules() {
        assert_eq!(decode("pzry9x0s0muk"), Err(DecodeError::MissingSeparator));
        assert_eq!(decode("1pzry9x0s0muk"), Err(DecodeError::EmptyHrp));
        assert_eq!(decode("bcqqqqq1qqqqq"), Err(DecodeError::ChecksumTooShort));
    }

    #[test]
    fn test_hrp_character_range() {
        assert_eq!(decode("\u{20}1nwldj5"), Err(DecodeError::InvalidHrpChar(' ')));
        assert_eq!(decode("\u{7f}1axkwrx"), Err(DecodeError::InvalidHrpChar('\u{7f}')));
    }

    #[test]
    fn test_invalid_data_char() {
        assert_eq!(
            decode("bc1p38j9r5y49hruaue7wxjce0updqjuyyx0kh56v8s25huc6995vvpql3jow4"),
            Err(DecodeError::InvalidDataChar { ch: 'o', position: 59 })
        );
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(decode("bc1gmk9yu"), Err(DecodeError::EmptyData));
    }

    #[test]
    fn test_invalid_version() {
        assert_eq!(
            decode("BC130XLXVLHEMJA6C4DQV22UAPCTQUPFHLXM9H8Z3K2E72Q4K9HCZ7VQ7ZWS8R"),
            Err(DecodeError::InvalidWitnessVersion(17))
        );
    }

    #[test]
    fn test_wrong_variant() {
        // v1 program checksummed with Bech32
        assert_eq!(
            decode("bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqh2y7hd"),
            Err(DecodeError::InvalidChecksum)
        );
        // v0 program checksummed with Bech32m
        assert_eq!(
            decode("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kemeawh"),
            Err(DecodeError::InvalidChecksum)
        );
    }

    #[test]
    fn test_padding_errors() {
        assert_eq!(
            decode("tb1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vpggkg4j"),
            Err(DecodeError::InvalidPadding(ConversionError::NonZeroPadding))
        );
        assert!(matches!(
            decode("bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7v07qwwzcrf"),
            Err(DecodeError::InvalidPadding(ConversionError::InvalidPadding { .. }))
        ));
    }

    #[test]
    fn test_program_length() {
        assert_eq!(
            decode("BC1QR508D6QEJXTDG4Y5R3ZARVARYV98GJ9P"),
            Err(DecodeError::InvalidSegwitV0Length(16))
        );
        assert_eq!(
            decode("bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7v8n0nx0muaewav253zgeav"),
            Err(DecodeError::InvalidProgramLength(41))
        );
    }

    #[test]
    fn test_decode_with_hrp() {
        let s = "tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sl5k7";
        assert!(decode_with_hrp(s, "tb").is_ok());
        assert!(decode_with_hrp(s, "TB").is_ok());
        assert_eq!(
            decode_with_hrp(s, "bc"),
            Err(DecodeError::HrpMismatch { expected: "bc".into(), actual: "tb".into() })
        );
        assert!(is_valid(s));
        assert!(is_valid_for_hrp(s, "tb"));
        assert!(!is_valid_for_hrp(s, "bc"));
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(Decoded::from_raw("bc", &[]), Err(DecodeError::EmptyData));
        assert_eq!(Decoded::from_raw("bc", &[17, 0, 0, 0, 0]), Err(DecodeError::InvalidWitnessVersion(17)));

        let decoded = Decoded::from_raw("BC", &[16, 14, 20, 15, 0]).unwrap();
        assert_eq!(decoded.hrp, "bc");
        assert_eq!(decoded.program, vec![0x75, 0x1e]);
    }
}
