//! Error types for Ethereum wallet operations.
//!
//! This module defines all errors that can occur during Ethereum
//! key derivation and address generation.

#[cfg(feature = "alloc")]
use alloc::string::String;

use core::fmt;

/// Errors that can occur during Ethereum wallet operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Invalid private key format or value (zero or >= curve order).
    InvalidPrivateKey,
    /// Invalid hex string format.
    InvalidHex,
    /// Private key text has the wrong number of hex digits (expected 64).
    InvalidKeyLength(usize),
    /// Key derivation error with details.
    #[cfg(feature = "alloc")]
    Derivation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrivateKey => write!(f, "invalid private key"),
            Self::InvalidHex => write!(f, "invalid hex string"),
            Self::InvalidKeyLength(n) => {
                write!(f, "invalid key length {n}, expected 64 hex digits")
            }
            #[cfg(feature = "alloc")]
            Self::Derivation(msg) => write!(f, "key derivation error: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
