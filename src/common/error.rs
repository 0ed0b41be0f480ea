//! Common Error Types
//!
//! Unifies codec, configuration and logging errors for callers that want a
//! single error type.

use thiserror::Error;

use crate::bech32::{ConversionError, DecodeError, EncodeError, HrpError};

/// Root error type
#[derive(Debug, Error)]
pub enum AddressError {
    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging errors
    #[error("logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Human-readable part errors
    #[error("invalid hrp: {0}")]
    Hrp(#[from] HrpError),

    /// Encoding errors
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Decoding errors
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Bit conversion errors
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

impl AddressError {
    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AddressError::Config(_) => "CONFIG_ERROR",
            AddressError::Logging(_) => "LOGGING_ERROR",
            AddressError::Hrp(_) => "HRP_ERROR",
            AddressError::Encode(e) => e.error_code(),
            AddressError::Decode(e) => e.error_code(),
            AddressError::Conversion(_) => "SEMANTIC_ERROR",
        }
    }

    /// Whether the error came from user-supplied address data (as opposed to
    /// local setup)
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, AddressError::Config(_) | AddressError::Logging(_))
    }
}

/// Result type alias using AddressError
pub type Result<T> = std::result::Result<T, AddressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AddressError::from(DecodeError::InvalidChecksum);
        assert_eq!(err.error_code(), "CHECKSUM_ERROR");
        assert!(err.to_string().contains("invalid checksum"));
        assert!(err.is_invalid_input());

        let err = AddressError::from(DecodeError::MixedCase);
        assert_eq!(err.error_code(), "CASE_ERROR");

        let err = AddressError::from(EncodeError::InvalidProgramLength(41));
        assert_eq!(err.error_code(), "SEMANTIC_ERROR");
    }

    #[test]
    fn test_config_error_is_not_input_error() {
        let err = AddressError::from(crate::config::ConfigError::MissingEnvVar("X".into()));
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(!err.is_invalid_input());
    }
}
