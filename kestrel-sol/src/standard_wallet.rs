//! Standard (non-HD) Solana wallet implementation.
//!
//! A standard wallet holds a single keypair with no mnemonic or HD
//! derivation. This is the type behind raw-private-key imports.

use alloc::string::String;
use ed25519_dalek::{SigningKey, VerifyingKey};
use zeroize::{Zeroize, Zeroizing};

use crate::Error;

/// A standard Solana wallet with a single keypair.
#[derive(Debug)]
pub struct StandardWallet {
    /// Ed25519 signing key.
    signing_key: SigningKey,
}

impl StandardWallet {
    /// Generate a new random wallet.
    ///
    /// Uses the operating system's cryptographically secure random number
    /// generator; entropy failure is returned, never papered over.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS entropy source fails.
    #[cfg(feature = "rand")]
    pub fn generate() -> Result<Self, Error> {
        let mut bytes = [0u8; 32];
        getrandom::fill(&mut bytes)
            .map_err(|e| Error::Derivation(alloc::format!("random generation failed: {e}")))?;
        let wallet = Self::from_bytes(&bytes);
        bytes.zeroize();
        Ok(wallet)
    }

    /// Create a wallet from a raw 32-byte secret seed.
    ///
    /// Uses the same seed-to-keypair expansion as HD derivation.
    #[must_use]
    pub fn from_bytes(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Create a wallet from a 64-byte keypair (secret 32B + public 32B).
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeypairMismatch`] if the public half is not the
    /// key derived from the secret half.
    pub fn from_keypair_bytes(bytes: &[u8; 64]) -> Result<Self, Error> {
        let signing_key =
            SigningKey::from_keypair_bytes(bytes).map_err(|_| Error::KeypairMismatch)?;
        Ok(Self { signing_key })
    }

    /// Create a wallet from Base58-encoded key material.
    ///
    /// Accepts either a 64-byte full keypair or a 32-byte secret seed;
    /// every other payload length is rejected. The key object is fully
    /// reconstructed before success is reported, so a 64-byte payload with
    /// an inconsistent public half fails.
    ///
    /// # Errors
    ///
    /// Returns an error on Base58 decode failure, unsupported payload
    /// length, or keypair inconsistency.
    pub fn from_base58(text: &str) -> Result<Self, Error> {
        let mut bytes = bs58::decode(text.trim())
            .into_vec()
            .map_err(|_| Error::InvalidBase58)?;

        let wallet = match bytes.len() {
            32 => {
                let mut seed = [0u8; 32];
                seed.copy_from_slice(&bytes);
                let wallet = Self::from_bytes(&seed);
                seed.zeroize();
                Ok(wallet)
            }
            64 => {
                let mut keypair = [0u8; 64];
                keypair.copy_from_slice(&bytes);
                let wallet = Self::from_keypair_bytes(&keypair);
                keypair.zeroize();
                wallet
            }
            other => Err(Error::InvalidKeyLength(other)),
        };

        bytes.zeroize();
        wallet
    }

    /// Get the Solana address as Base58 encoded string.
    #[inline]
    #[must_use]
    pub fn address(&self) -> String {
        let verifying_key: VerifyingKey = self.signing_key.verifying_key();
        bs58::encode(verifying_key.as_bytes()).into_string()
    }

    /// Get the full keypair in Base58 format (64 bytes, zeroized on drop).
    ///
    /// This is the canonical export form; re-encoding an imported 64-byte
    /// keypair yields the identical string.
    #[inline]
    #[must_use]
    pub fn keypair_base58(&self) -> Zeroizing<String> {
        let mut keypair_bytes = self.signing_key.to_keypair_bytes();
        let encoded = Zeroizing::new(bs58::encode(&keypair_bytes).into_string());
        keypair_bytes.fill(0);
        encoded
    }

    /// Get the secret seed as raw bytes (zeroized on drop).
    #[inline]
    #[must_use]
    pub fn secret_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(*self.signing_key.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "rand")]
    #[test]
    fn test_generate() {
        let wallet = StandardWallet::generate().unwrap();
        let address = wallet.address();

        // Solana addresses are 32-44 characters in Base58
        assert!(address.len() >= 32 && address.len() <= 44);
    }

    #[test]
    fn test_from_bytes() {
        let key = [1u8; 32];
        let wallet = StandardWallet::from_bytes(&key);
        let address = wallet.address();

        assert!(address.len() >= 32 && address.len() <= 44);
    }

    #[test]
    fn test_from_base58_seed() {
        let seed = [42u8; 32];
        let encoded = bs58::encode(&seed).into_string();
        let wallet = StandardWallet::from_base58(&encoded).unwrap();

        assert_eq!(*wallet.secret_bytes(), seed);
    }

    #[test]
    fn test_from_base58_keypair() {
        let source = StandardWallet::from_bytes(&[7u8; 32]);
        let encoded = source.keypair_base58();
        let wallet = StandardWallet::from_base58(&encoded).unwrap();

        assert_eq!(wallet.address(), source.address());
        // Canonical re-encode is byte-identical.
        assert_eq!(*wallet.keypair_base58(), *encoded);
    }

    #[test]
    fn test_from_base58_rejects_bad_length() {
        // 31-byte payload
        let short = bs58::encode(&[1u8; 31]).into_string();
        assert!(matches!(
            StandardWallet::from_base58(&short),
            Err(Error::InvalidKeyLength(31))
        ));

        // 65-byte payload
        let long = bs58::encode(&[1u8; 65]).into_string();
        assert!(matches!(
            StandardWallet::from_base58(&long),
            Err(Error::InvalidKeyLength(65))
        ));
    }

    #[test]
    fn test_from_base58_rejects_bad_encoding() {
        // '0', 'O', 'I', 'l' are not in the Base58 alphabet.
        assert!(matches!(
            StandardWallet::from_base58("0OIl"),
            Err(Error::InvalidBase58)
        ));
    }

    #[test]
    fn test_from_base58_rejects_mismatched_keypair() {
        let mut keypair = StandardWallet::from_bytes(&[9u8; 32])
            .signing_key
            .to_keypair_bytes();
        // Corrupt the public half.
        keypair[32] ^= 0x01;
        let encoded = bs58::encode(&keypair).into_string();

        assert!(matches!(
            StandardWallet::from_base58(&encoded),
            Err(Error::KeypairMismatch)
        ));
    }

    #[test]
    fn test_deterministic() {
        let key = [42u8; 32];
        let wallet1 = StandardWallet::from_bytes(&key);
        let wallet2 = StandardWallet::from_bytes(&key);

        assert_eq!(wallet1.address(), wallet2.address());
    }
}
