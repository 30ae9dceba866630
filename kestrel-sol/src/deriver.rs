//! Solana address derivation from HD wallet.

use alloc::string::String;
use alloc::vec::Vec;
use ed25519_dalek::VerifyingKey;
use kestrel::Wallet;
use zeroize::Zeroizing;

use crate::Error;
use crate::slip10::DerivedKey;

/// A derived Solana address with associated keys.
#[derive(Debug, Clone)]
pub struct DerivedAddress {
    /// Derivation path used (e.g., `m/44'/501'/0'/0'`).
    pub path: String,
    /// Full keypair in Base58 format (64 bytes: secret 32B + public 32B,
    /// zeroized on drop).
    ///
    /// This is the standard export format used by Solana wallet software.
    pub keypair_base58: Zeroizing<String>,
    /// Solana address (Base58 encoded public key).
    pub address: String,
}

/// Solana address deriver from a unified wallet seed.
///
/// This deriver takes a seed from [`kestrel::Wallet`] and derives Solana
/// addresses following the BIP-44/SLIP-0010 hardened path
/// `m/44'/501'/index'/0'`.
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a new Solana deriver from a wallet.
    #[inline]
    #[must_use]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive a Solana address at the given account index.
    ///
    /// Uses path: `m/44'/501'/index'/0'`
    ///
    /// Derivation is a pure function of (seed, index): it never touches
    /// shared state and equal inputs always produce identical output.
    ///
    /// # Errors
    ///
    /// Returns an error if derivation fails.
    pub fn derive(&self, index: u32) -> Result<DerivedAddress, Error> {
        let derived = DerivedKey::derive_account_path(self.wallet.seed(), index)?;
        let signing_key = derived.to_signing_key();
        let verifying_key: VerifyingKey = signing_key.verifying_key();

        // Base58-encoded 64-byte keypair (secret 32B + public 32B).
        let mut keypair_bytes = signing_key.to_keypair_bytes();
        let keypair_b58 = bs58::encode(&keypair_bytes).into_string();
        keypair_bytes.fill(0);

        Ok(DerivedAddress {
            path: DerivedKey::format_path(index),
            keypair_base58: Zeroizing::new(keypair_b58),
            address: bs58::encode(verifying_key.as_bytes()).into_string(),
        })
    }

    /// Derive multiple addresses in sequence.
    ///
    /// # Arguments
    ///
    /// * `start` - Starting account index
    /// * `count` - Number of addresses to derive
    ///
    /// # Errors
    ///
    /// Returns an error if any derivation fails.
    pub fn derive_many(&self, start: u32, count: u32) -> Result<Vec<DerivedAddress>, Error> {
        (start..start + count).map(|index| self.derive(index)).collect()
    }
}
