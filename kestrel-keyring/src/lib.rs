//! Account registry for the Kestrel multi-chain wallet.
//!
//! This crate ties the mnemonic engine and the chain derivers together
//! into a [`WalletState`]: an ordered collection of accounts (HD-derived
//! or imported from raw private keys) plus the per-chain derivation
//! counters. Every operation is a pure transformation: it takes a state
//! snapshot and returns a new one, leaving the input untouched. The caller
//! owns serialization of concurrent mutations and persistence of the
//! resulting snapshots.
//!
//! # Usage
//!
//! ```
//! use kestrel_keyring::{Chain, WalletState};
//!
//! let state = WalletState::generate()?;
//! let (account, state) = state.create_account(Chain::Solana, None)?;
//!
//! assert_eq!(account.derivation_path(), "m/44'/501'/0'/0'");
//! assert_eq!(state.next_index(Chain::Solana), 1);
//! # Ok::<(), kestrel_keyring::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod account;
mod error;
#[cfg(feature = "alloc")]
mod state;

#[cfg(feature = "alloc")]
pub use account::{AccountId, AccountOrigin, AccountRecord, Chain};
pub use error::Error;
#[cfg(feature = "alloc")]
pub use state::{validate_import_candidate, WalletState};

#[cfg(feature = "alloc")]
pub use kestrel::mnemonic::validate as validate_phrase;

/// A convenient Result type alias for kestrel-keyring operations.
pub type Result<T> = core::result::Result<T, Error>;
