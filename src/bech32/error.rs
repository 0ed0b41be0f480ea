//! Codec error types
//!
//! Every rejection is a distinct variant so callers can tell structural,
//! character-set, case, semantic and checksum failures apart. Callers that
//! only need pass/fail use the `is_valid*` wrappers.

use serde::Serialize;
use thiserror::Error;

/// Bit regrouping errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("value {value} at position {position} does not fit the source bit width")]
    InvalidValue { position: usize, value: u8 },

    #[error("{bits} leftover bits is more than padding allows")]
    InvalidPadding { bits: u32 },

    #[error("non-zero padding bits")]
    NonZeroPadding,
}

/// Witness program length errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgramLengthError {
    #[error("witness program must be between 2 and 40 bytes: length={0}")]
    InvalidLength(usize),

    #[error("a v0 witness program must be either 20 or 32 bytes: length={0}")]
    InvalidSegwitV0Length(usize),
}

/// Human-readable part errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HrpError {
    #[error("human-readable part is empty")]
    Empty,

    #[error("human-readable part is {0} characters, maximum is 83")]
    TooLong(usize),

    #[error("invalid character {0:?} in human-readable part")]
    InvalidChar(char),

    #[error("human-readable part mixes upper and lower case")]
    MixedCase,
}

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Hrp(#[from] HrpError),

    #[error("witness version {0} is greater than 16")]
    InvalidWitnessVersion(u8),

    #[error("witness program must be between 2 and 40 bytes: length={0}")]
    InvalidProgramLength(usize),

    #[error("a v0 witness program must be either 20 or 32 bytes: length={0}")]
    InvalidSegwitV0Length(usize),

    #[error("encoded address would be {0} characters, maximum is 90")]
    TooLong(usize),
}

/// Decoding errors, in the order the decoder checks them
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("address length {0} is outside 8..=90")]
    InvalidLength(usize),

    #[error("address mixes upper and lower case")]
    MixedCase,

    #[error("missing separator '1'")]
    MissingSeparator,

    #[error("human-readable part is empty")]
    EmptyHrp,

    #[error("human-readable part is {0} characters, maximum is 83")]
    HrpTooLong(usize),

    #[error("data part is shorter than the 6-character checksum")]
    ChecksumTooShort,

    #[error("invalid character {0:?} in human-readable part")]
    InvalidHrpChar(char),

    #[error("invalid character {ch:?} at position {position} in data part")]
    InvalidDataChar { ch: char, position: usize },

    #[error("data part carries no witness version")]
    EmptyData,

    #[error("witness version {0} is greater than 16")]
    InvalidWitnessVersion(u8),

    #[error("invalid checksum")]
    InvalidChecksum,

    #[error("invalid padding in witness program: {0}")]
    InvalidPadding(#[from] ConversionError),

    #[error("witness program must be between 2 and 40 bytes: length={0}")]
    InvalidProgramLength(usize),

    #[error("a v0 witness program must be either 20 or 32 bytes: length={0}")]
    InvalidSegwitV0Length(usize),

    #[error("human-readable part mismatch: expected {expected}, got {actual}")]
    HrpMismatch { expected: String, actual: String },
}

impl From<HrpError> for DecodeError {
    fn from(err: HrpError) -> Self {
        match err {
            HrpError::Empty => DecodeError::EmptyHrp,
            HrpError::TooLong(len) => DecodeError::HrpTooLong(len),
            HrpError::InvalidChar(c) => DecodeError::InvalidHrpChar(c),
            HrpError::MixedCase => DecodeError::MixedCase,
        }
    }
}

impl From<ProgramLengthError> for EncodeError {
    fn from(err: ProgramLengthError) -> Self {
        match err {
            ProgramLengthError::InvalidLength(len) => EncodeError::InvalidProgramLength(len),
            ProgramLengthError::InvalidSegwitV0Length(len) => EncodeError::InvalidSegwitV0Length(len),
        }
    }
}

impl From<ProgramLengthError> for DecodeError {
    fn from(err: ProgramLengthError) -> Self {
        match err {
            ProgramLengthError::InvalidLength(len) => DecodeError::InvalidProgramLength(len),
            ProgramLengthError::InvalidSegwitV0Length(len) => DecodeError::InvalidSegwitV0Length(len),
        }
    }
}

/// Rejection classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Length, separator, empty sections
    Structural,
    /// Characters outside the hrp range or the alphabet
    CharacterSet,
    /// Mixed case
    Case,
    /// Version, program length, padding
    Semantic,
    /// Checksum mismatch
    Checksum,
    /// Decoded hrp differs from the caller's expectation
    HrpMismatch,
}

impl DecodeError {
    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            DecodeError::InvalidLength(_)
            | DecodeError::MissingSeparator
            | DecodeError::EmptyHrp
            | DecodeError::HrpTooLong(_)
            | DecodeError::ChecksumTooShort
            | DecodeError::EmptyData => ErrorCategory::Structural,
            DecodeError::InvalidHrpChar(_) | DecodeError::InvalidDataChar { .. } => {
                ErrorCategory::CharacterSet
            }
            DecodeError::MixedCase => ErrorCategory::Case,
            DecodeError::InvalidWitnessVersion(_)
            | DecodeError::InvalidPadding(_)
            | DecodeError::InvalidProgramLength(_)
            | DecodeError::InvalidSegwitV0Length(_) => ErrorCategory::Semantic,
            DecodeError::InvalidChecksum => ErrorCategory::Checksum,
            DecodeError::HrpMismatch { .. } => ErrorCategory::HrpMismatch,
        }
    }

    /// Stable error code for logs and API responses
    pub fn error_code(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Structural => "STRUCTURE_ERROR",
            ErrorCategory::CharacterSet => "CHARSET_ERROR",
            ErrorCategory::Case => "CASE_ERROR",
            ErrorCategory::Semantic => "SEMANTIC_ERROR",
            ErrorCategory::Checksum => "CHECKSUM_ERROR",
            ErrorCategory::HrpMismatch => "HRP_MISMATCH",
        }
    }
}

impl EncodeError {
    /// Stable error code for logs and API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            EncodeError::Hrp(_) => "HRP_ERROR",
            EncodeError::InvalidWitnessVersion(_)
            | EncodeError::InvalidProgramLength(_)
            | EncodeError::InvalidSegwitV0Length(_) => "SEMANTIC_ERROR",
            EncodeError::TooLong(_) => "STRUCTURE_ERROR",
        }
    }
}
