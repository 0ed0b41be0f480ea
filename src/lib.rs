//! Witness Address - SegWit Address Codec
//!
//! Encodes and validates native SegWit addresses: witness version 0 under
//! Bech32 (BIP-173) and versions 1..=16 under Bech32m (BIP-350).
//!
//! ## Layers
//!
//! 1. **bech32** - alphabet, checksum engine, bit regrouping, string encoder
//!    and decoder
//! 2. **address** - the validated [`Address`] value type with its hrp and
//!    witness version newtypes
//! 3. **config / logging** - environment-driven network prefix and
//!    `tracing` setup for services validating user input
//!
//! ## Example
//!
//! ```
//! use witness_address::Address;
//!
//! let addr: Address = "BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4".parse().unwrap();
//! assert_eq!(addr.hrp().as_str(), "bc");
//! assert_eq!(addr.witness_program().len(), 20);
//! assert_eq!(addr.to_string(), "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
//! ```

pub mod address;
pub mod bech32;
pub mod common;
pub mod config;
pub mod logging;

// Re-exports: Address
pub use address::{Address, AddressType, Hrp, WitnessVersion, TESTNET_PREFIX};

// Re-exports: Codec
pub use bech32::{
    decode, decode_with_hrp, encode, encode_upper, is_valid, is_valid_for_hrp, Decoded, Variant,
};

// Re-exports: Errors
pub use bech32::{ConversionError, DecodeError, EncodeError, ErrorCategory, HrpError};
pub use common::{AddressError, Result};

// Re-exports: Config & Logging
pub use config::{AddressConfig, ConfigError, Network};
pub use logging::{init_from_config, init_logging, log_validation_event, LogLevel, LoggingError};
