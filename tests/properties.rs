//! Randomized round-trip and error-detection checks

use rand::Rng;

use witness_address::bech32::{charset, checksum, convert, DecodeError, Variant};
use witness_address::Address;

const ROUNDS: usize = 200;

fn random_address<R: Rng>(rng: &mut R) -> Address {
    let hrp = ["bc", "tb", "bcrt"][rng.gen_range(0..3)];
    let version: u8 = rng.gen_range(0..=16);
    let len = if version == 0 {
        if rng.gen_bool(0.5) { 20 } else { 32 }
    } else {
        rng.gen_range(2..=40)
    };
    let mut program = vec![0u8; len];
    rng.fill(&mut program[..]);

    Address::new(hrp, version, program).unwrap()
}

/// Assemble an address string with an explicit checksum variant
fn encode_with_variant(hrp: &str, version: u8, program: &[u8], variant: Variant) -> String {
    let mut data = vec![version];
    data.extend(convert::to_base32(program));
    let sum = checksum::create_checksum(hrp, &data, variant);

    let mut s = format!("{}1", hrp);
    for symbol in data.iter().chain(sum.iter()) {
        s.push(charset::to_char(*symbol).unwrap());
    }
    s
}

#[test]
fn test_roundtrip() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let address = random_address(&mut rng);
        let s = address.to_string();

        let (decoded, hrp) = Address::decode(&s).unwrap();
        assert_eq!(decoded, address);
        assert_eq!(hrp, address.hrp().as_str());

        let (upper, _) = Address::decode(&s.to_uppercase()).unwrap();
        assert_eq!(upper, address);
    }
}

#[test]
fn test_single_substitution_detected() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let address = random_address(&mut rng);
        let s = address.to_string();
        let mut chars: Vec<char> = s.chars().collect();

        // any program or checksum symbol; the version symbol selects the variant
        let first = address.hrp().len() + 2;
        let index = rng.gen_range(first..chars.len());
        let original = chars[index];
        let replacement = loop {
            let c = charset::CHARSET[rng.gen_range(0..32)] as char;
            if c != original {
                break c;
            }
        };
        chars[index] = replacement;

        let corrupted: String = chars.into_iter().collect();
        assert!(Address::decode(&corrupted).is_err(), "{} -> {}", s, corrupted);
    }
}

#[test]
fn test_variant_bound_to_version() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let address = random_address(&mut rng);
        let version = address.witness_version().to_u8();
        let wrong = match address.witness_version().variant() {
            Variant::Bech32 => Variant::Bech32m,
            Variant::Bech32m => Variant::Bech32,
        };

        let s = encode_with_variant(address.hrp().as_str(), version, address.witness_program(), wrong);
        assert_eq!(Address::decode(&s).map(|(a, _)| a), Err(DecodeError::InvalidChecksum));

        let right = address.witness_version().variant();
        let s = encode_with_variant(address.hrp().as_str(), version, address.witness_program(), right);
        assert_eq!(s, address.to_string());
    }
}

#[test]
fn test_mixed_case_rejected() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let s = random_address(&mut rng).to_string();

        // flip the case of a single letter; every address has at least the hrp letters
        let letters: Vec<usize> =
            s.char_indices().filter(|(_, c)| c.is_ascii_alphabetic()).map(|(i, _)| i).collect();
        let index = letters[rng.gen_range(0..letters.len())];
        let mut mixed = s.clone().into_bytes();
        mixed[index] = mixed[index].to_ascii_uppercase();
        let mixed = String::from_utf8(mixed).unwrap();

        assert_eq!(Address::decode(&mixed).map(|(a, _)| a), Err(DecodeError::MixedCase));
    }
}

#[test]
fn test_bit_conversion_roundtrip() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let len = rng.gen_range(0..=64);
        let mut bytes = vec![0u8; len];
        rng.fill(&mut bytes[..]);

        let symbols = convert::to_base32(&bytes);
        assert_eq!(symbols.len(), (len * 8 + 4) / 5);
        assert!(symbols.iter().all(|s| *s < 32));
        assert_eq!(convert::from_base32(&symbols).unwrap(), bytes);
    }
}

#[test]
fn test_length_bounds() {
    // 7 characters
    assert_eq!(Address::decode("bc1qqqq").map(|(a, _)| a), Err(DecodeError::InvalidLength(7)));

    // 91 characters
    let long = format!("{}1{}", "a".repeat(20), "q".repeat(70));
    assert_eq!(long.len(), 91);
    assert_eq!(Address::decode(&long).map(|(a, _)| a), Err(DecodeError::InvalidLength(91)));

    // 90 characters is the longest encodable address
    let hrp = "a".repeat(18);
    let address = Address::new(&hrp, 1, vec![0u8; 40]).unwrap();
    assert_eq!(address.to_string().len(), 90);
    assert!(Address::is_valid(&address.to_string()));
}
