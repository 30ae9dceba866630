//! Solana wallet utilities for Kestrel.
//!
//! Provides Solana address derivation from a unified [`kestrel::Wallet`]
//! and standalone keypair import from Base58-encoded key material.
//!
//! # Features
//!
//! - `std` (default): Enable standard library support
//! - `alloc`: Enable heap allocation without full std (for `no_std` environments)
//! - `rand`: Enable random key generation for `StandardWallet`
//!
//! # Usage
//!
//! ```
//! use kestrel::Wallet;
//! use kestrel_sol::Deriver;
//!
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! ).unwrap();
//!
//! let deriver = Deriver::new(&wallet);
//! let addr = deriver.derive(0).unwrap();
//! assert_eq!(addr.path, "m/44'/501'/0'/0'");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod deriver;
mod error;
#[cfg(feature = "alloc")]
mod slip10;
#[cfg(feature = "alloc")]
mod standard_wallet;

#[cfg(feature = "alloc")]
pub use deriver::{DerivedAddress, Deriver};
pub use error::Error;
#[cfg(feature = "alloc")]
pub use standard_wallet::StandardWallet;

/// BIP-44 coin type for Solana.
pub const COIN_TYPE: u32 = 501;

/// A convenient Result type alias for kestrel-sol operations.
pub type Result<T> = core::result::Result<T, Error>;
