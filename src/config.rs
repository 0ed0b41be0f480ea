//! Environment-based Configuration
//!
//! Network prefixes are supplied by the deployment, not compiled in. Only the
//! testnet prefix (`tb`) has a built-in default.
//!
//! # Environment Variables
//!
//! - `WITNESS_ADDR_NETWORK` - "mainnet", "testnet" or "regtest" (default: "testnet")
//! - `WITNESS_ADDR_HRP` - Human-readable part for this network. Required on
//!   mainnet and regtest; defaults to "tb" on testnet
//! - `WITNESS_ADDR_LOG_LEVEL` - Logging level (trace, debug, info, warn, error)
//! - `WITNESS_ADDR_LOG_JSON` - Set to "1" for JSON logs (default on mainnet)

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::address::{Address, Hrp, TESTNET_PREFIX};
use crate::bech32::DecodeError;

pub const ENV_NETWORK: &str = "WITNESS_ADDR_NETWORK";
pub const ENV_HRP: &str = "WITNESS_ADDR_HRP";
pub const ENV_LOG_LEVEL: &str = "WITNESS_ADDR_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "WITNESS_ADDR_LOG_JSON";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Network environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" | "signet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            _ => Err(ConfigError::InvalidValue(
                ENV_NETWORK.to_string(),
                format!("unknown network: {}", s),
            )),
        }
    }
}

impl Network {
    /// Built-in hrp for this network, if any
    pub fn default_hrp(&self) -> Option<&'static str> {
        match self {
            Network::Testnet => Some(TESTNET_PREFIX),
            Network::Mainnet | Network::Regtest => None,
        }
    }
}

/// Address configuration
#[derive(Debug, Clone)]
pub struct AddressConfig {
    /// Network environment
    pub network: Network,

    /// Human-readable part addresses must carry
    pub hrp: Hrp,

    /// Log level
    pub log_level: String,

    /// JSON log output
    pub log_json: bool,
}

impl AddressConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through a variable lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network: Network = lookup(ENV_NETWORK)
            .unwrap_or_else(|| "testnet".to_string())
            .parse()?;

        let hrp_value = match lookup(ENV_HRP).filter(|v| !v.is_empty()) {
            Some(value) => value,
            None => network
                .default_hrp()
                .map(str::to_string)
                .ok_or_else(|| ConfigError::MissingEnvVar(ENV_HRP.to_string()))?,
        };
        let hrp = Hrp::parse(&hrp_value)
            .map_err(|e| ConfigError::InvalidValue(ENV_HRP.to_string(), e.to_string()))?;

        let log_level = lookup(ENV_LOG_LEVEL).unwrap_or_else(|| "info".to_string());
        let log_json = lookup(ENV_LOG_JSON)
            .map(|v| v == "1")
            .unwrap_or(network == Network::Mainnet);

        Ok(Self { network, hrp, log_level, log_json })
    }

    /// Configuration for an explicit hrp with default logging
    pub fn with_hrp(network: Network, hrp: Hrp) -> Self {
        Self {
            network,
            hrp,
            log_level: "info".to_string(),
            log_json: network == Network::Mainnet,
        }
    }

    /// The configured human-readable part
    pub fn hrp(&self) -> &Hrp {
        &self.hrp
    }

    /// Decode an address and require the configured hrp
    pub fn validate(&self, s: &str) -> Result<Address, DecodeError> {
        Address::decode_with_hrp(s, self.hrp.as_str()).map(|(address, _hrp)| address)
    }

    /// Whether `s` is a valid address for the configured hrp
    pub fn is_valid(&self, s: &str) -> bool {
        self.validate(s).is_ok()
    }
}
