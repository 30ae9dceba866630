//! Ethereum wallet utilities for Kestrel.
//!
//! Provides Ethereum address derivation from a unified [`kestrel::Wallet`]
//! and standalone account import from hex-encoded private keys.
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
//! use kestrel_evm::Deriver;
//!
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! ).unwrap();
//!
//! let deriver = Deriver::new(&wallet);
//! let addr = deriver.derive(0).unwrap();
//! assert_eq!(addr.path, "m/44'/60'/0'/0/0");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod address;
#[cfg(feature = "alloc")]
mod deriver;
mod error;
#[cfg(feature = "alloc")]
mod standard_wallet;

#[cfg(feature = "alloc")]
pub use address::{public_key_to_address, to_checksum_address};
#[cfg(feature = "alloc")]
pub use deriver::{DerivedAddress, Deriver};
pub use error::Error;
#[cfg(feature = "alloc")]
pub use standard_wallet::StandardWallet;

/// BIP-44 coin type for Ethereum.
pub const COIN_TYPE: u32 = 60;

/// A convenient Result type alias for kestrel-evm operations.
pub type Result<T> = core::result::Result<T, Error>;
