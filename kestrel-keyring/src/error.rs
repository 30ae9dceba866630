//! Error types for account registry operations.

use core::fmt;

/// Errors that can occur during account registry operations.
///
/// Validation failures (a bad phrase candidate, unusable import text) are
/// not represented here; those are reported as `bool`/`None` results. An
/// `Error` always signals caller-side misuse or an engine failure, not bad
/// user input.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The wallet has no recovery phrase; HD accounts cannot be created.
    NotInitialized,
    /// Mnemonic engine error.
    Mnemonic(kestrel::Error),
    /// Solana derivation error.
    Solana(kestrel_sol::Error),
    /// Ethereum derivation error.
    Ethereum(kestrel_evm::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "wallet not initialized: no recovery phrase"),
            Self::Mnemonic(e) => write!(f, "mnemonic error: {e}"),
            Self::Solana(e) => write!(f, "solana error: {e}"),
            Self::Ethereum(e) => write!(f, "ethereum error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotInitialized => None,
            Self::Mnemonic(e) => Some(e),
            Self::Solana(e) => Some(e),
            Self::Ethereum(e) => Some(e),
        }
    }
}

impl From<kestrel::Error> for Error {
    fn from(err: kestrel::Error) -> Self {
        Self::Mnemonic(err)
    }
}

impl From<kestrel_sol::Error> for Error {
    fn from(err: kestrel_sol::Error) -> Self {
        Self::Solana(err)
    }
}

impl From<kestrel_evm::Error> for Error {
    fn from(err: kestrel_evm::Error) -> Self {
        Self::Ethereum(err)
    }
}
