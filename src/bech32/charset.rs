//! Bech32 Alphabet
//!
//! The 32-symbol table shared by Bech32 and Bech32m. Characters that are
//! easily confused (`1`, `b`, `i`, `o`) are excluded.

/// Encoding table: 5-bit value -> character
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Decoding table indexed by ASCII byte, -1 for characters outside the set.
/// Upper and lower case map to the same value.
#[rustfmt::skip]
const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30,  7,  5, -1, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
];

/// Map a 5-bit value to its lowercase character.
///
/// Returns `None` for values >= 32.
pub fn to_char(value: u8) -> Option<char> {
    CHARSET.get(value as usize).map(|&b| b as char)
}

/// Map a character (either case) to its 5-bit value.
pub fn from_char(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match CHARSET_REV[c as usize] {
        -1 => None,
        v => Some(v as u8),
    }
}
