//! Human-readable part
//!
//! Registered prefixes: <https://github.com/satoshilabs/slips/blob/master/slip-0173.md>

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bech32::encode::normalize_hrp;
use crate::bech32::HrpError;

/// Prefix for Bitcoin testnet SegWit addresses
pub const TESTNET_PREFIX: &str = "tb";

/// A validated, lowercase human-readable part
///
/// Mainnet and other network prefixes are not built in; they come from the
/// caller (see [`crate::config::AddressConfig`]).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hrp(String);

impl Hrp {
    /// Validate and normalize an hrp
    pub fn parse(hrp: &str) -> Result<Self, HrpError> {
        normalize_hrp(hrp).map(Self)
    }

    /// The testnet prefix (`tb`)
    pub fn testnet() -> Self {
        Self(TESTNET_PREFIX.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an `Hrp` has at least one character
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Hrp {
    type Err = HrpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hrp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hrp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Hrp {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for Hrp {
    fn eq(&self, other: &&str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Serialize for Hrp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Hrp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hrp::parse(&s).map_err(serde::de::Error::custom)
    }
}
