//! Error types for Solana wallet operations.

#[cfg(feature = "alloc")]
use alloc::string::String;
use core::fmt;

/// Errors that can occur during Solana wallet operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Key derivation failed with details.
    #[cfg(feature = "alloc")]
    Derivation(String),
    /// Key derivation failed (no details in no_std).
    #[cfg(not(feature = "alloc"))]
    Derivation,
    /// Invalid seed length.
    InvalidSeedLength,
    /// Invalid Base58 string.
    InvalidBase58,
    /// Decoded key material has an unsupported length (expected 32 or 64 bytes).
    InvalidKeyLength(usize),
    /// The public half of a 64-byte keypair does not match its secret half.
    KeypairMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "alloc")]
            Self::Derivation(msg) => write!(f, "derivation error: {msg}"),
            #[cfg(not(feature = "alloc"))]
            Self::Derivation => write!(f, "derivation error"),
            Self::InvalidSeedLength => write!(f, "invalid seed length"),
            Self::InvalidBase58 => write!(f, "invalid base58 string"),
            Self::InvalidKeyLength(n) => {
                write!(f, "invalid key length {n}, expected 32 or 64 bytes")
            }
            Self::KeypairMismatch => {
                write!(f, "keypair public key does not match its secret key")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
