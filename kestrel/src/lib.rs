//! # Kestrel - Multi-Chain Wallet Core
//!
//! Core primitives for the Kestrel deterministic wallet: BIP-39 mnemonic
//! handling, seed derivation, and the shared encoding helpers used by the
//! chain-specific crates.
//!
//! # Example
//!
//! ```
//! use kestrel::Wallet;
//!
//! // Restore a wallet from an existing recovery phrase
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! )?;
//!
//! // The same phrase always yields the same 64-byte seed
//! let seed = wallet.seed();
//! # Ok::<(), kestrel::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod encoding;
pub mod error;
pub mod hash;
#[cfg(feature = "alloc")]
pub mod mnemonic;
#[cfg(feature = "alloc")]
mod wallet;

pub use error::Error;
#[cfg(feature = "alloc")]
pub use wallet::Wallet;

/// A convenient Result type alias for kestrel operations.
pub type Result<T> = core::result::Result<T, Error>;
