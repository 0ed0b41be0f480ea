//! Common Infrastructure Module
//!
//! Shared error types for the codec, address, configuration and logging
//! layers.

pub mod error;

pub use error::{AddressError, Result};
