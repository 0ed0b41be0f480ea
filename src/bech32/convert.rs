//! Bit regrouping between 8-bit bytes and 5-bit symbols
//!
//! Bits are accumulated MSB-first. Encoding (8 -> 5) zero-fills the final
//! group; decoding (5 -> 8) requires the leftover bits to be fewer than one
//! input group and all zero, so every byte string has exactly one encoding.

use super::error::ConversionError;

/// Regroup `data` from `from`-bit values into `to`-bit values
///
/// With `pad`, a trailing partial group is zero-filled and emitted. Without
/// it, a trailing partial group must be shorter than `from` bits and zero.
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, ConversionError> {
    debug_assert!((1..=8).contains(&from) && (1..=8).contains(&to));

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max_value: u32 = (1 << to) - 1;
    let max_acc: u32 = (1 << (from + to - 1)) - 1;
    let mut out = Vec::with_capacity(data.len() * from as usize / to as usize + 1);

    for (position, &value) in data.iter().enumerate() {
        let value = u32::from(value);
        if value >> from != 0 {
            return Err(ConversionError::InvalidValue { position, value: value as u8 });
        }
        acc = ((acc << from) | value) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & max_value) as u8);
        }
    } else if bits >= from {
        return Err(ConversionError::InvalidPadding { bits });
    } else if (acc << (to - bits)) & max_value != 0 {
        return Err(ConversionError::NonZeroPadding);
    }

    Ok(out)
}

/// Bytes -> 5-bit symbols (zero padded)
pub fn to_base32(bytes: &[u8]) -> Vec<u8> {
    // 8 -> 5 with padding cannot fail: every byte fits in 8 bits
    convert_bits(bytes, 8, 5, true).unwrap_or_default()
}

/// 5-bit symbols -> bytes (strict padding)
pub fn from_base32(symbols: &[u8]) -> Result<Vec<u8>, ConversionError> {
    convert_bits(symbols, 5, 8, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base32() {
        // 0xff 0x01 -> 11111 11100 00000 1(0000)
        assert_eq!(to_base32(&[0xff, 0x01]), vec![31, 28, 0, 16]);
        assert_eq!(to_base32(&[]), Vec::<u8>::new());
        assert_eq!(to_base32(&[0u8; 20]).len(), 32);
        assert_eq!(to_base32(&[0u8; 32]).len(), 52);
    }

    #[test]
    fn test_from_base32() {
        assert_eq!(from_base32(&[31, 28, 0, 16]).unwrap(), vec![0xff, 0x01]);
    }

    #[test]
    fn test_roundtrip_lengths() {
        for len in 0..=40usize {
            let bytes: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            assert_eq!(from_base32(&to_base32(&bytes)).unwrap(), bytes);
        }
    }

    #[test]
    fn test_nonzero_padding_rejected() {
        // last symbol carries a stray low bit in the padding
        assert_eq!(from_base32(&[31, 28, 0, 17]), Err(ConversionError::NonZeroPadding));
    }

    #[test]
    fn test_excess_padding_rejected() {
        // 3 symbols = 15 bits -> one byte plus 7 leftover bits
        assert_eq!(from_base32(&[0, 0, 0]), Err(ConversionError::InvalidPadding { bits: 7 }));
    }

    #[test]
    fn test_out_of_range_symbol() {
        assert_eq!(
            from_base32(&[1, 32]),
            Err(ConversionError::InvalidValue { position: 1, value: 32 })
        );
    }
}
