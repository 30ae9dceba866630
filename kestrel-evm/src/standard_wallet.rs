//! Standard (non-HD) Ethereum wallet implementation.
//!
//! A standard wallet holds a single private key with no mnemonic or HD
//! derivation. This is the type behind raw-private-key imports.

use alloc::string::String;

use k256::ecdsa::SigningKey;
use zeroize::{Zeroize, Zeroizing};

use crate::Error;
use crate::address::{public_key_to_address, to_checksum_address};

/// A standard Ethereum wallet with a single private key.
#[derive(Debug)]
pub struct StandardWallet {
    /// ECDSA signing key (secp256k1).
    private_key: SigningKey,
}

impl StandardWallet {
    /// Generate a new standard wallet with a random private key.
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
        // Candidate bytes outside the scalar field are rejected and redrawn.
        loop {
            getrandom::fill(&mut bytes)
                .map_err(|e| Error::Derivation(alloc::format!("random generation failed: {e}")))?;
            if let Ok(private_key) = SigningKey::from_slice(&bytes) {
                bytes.zeroize();
                return Ok(Self { private_key });
            }
        }
    }

    /// Create a wallet from a raw 32-byte secret key.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is invalid (zero or >= curve order).
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, Error> {
        let private_key = SigningKey::from_slice(bytes).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self { private_key })
    }

    /// Import a wallet from a hex-encoded secret key.
    ///
    /// The text may carry an optional `0x` prefix and must contain exactly
    /// 64 hex digits. The scalar is fully reconstructed before success is
    /// reported, so an all-zero or out-of-range value fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the hex string is malformed, has the wrong
    /// length, or encodes an invalid secret key.
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        let text = text.trim();
        let digits = text.strip_prefix("0x").unwrap_or(text);

        if digits.len() != 64 {
            return Err(Error::InvalidKeyLength(digits.len()));
        }

        let mut bytes = hex::decode(digits).map_err(|_| Error::InvalidHex)?;
        let result = SigningKey::from_slice(&bytes)
            .map(|private_key| Self { private_key })
            .map_err(|_| Error::InvalidPrivateKey);
        bytes.zeroize();
        result
    }

    /// Get the checksummed Ethereum address (EIP-55).
    #[inline]
    #[must_use]
    pub fn address(&self) -> String {
        let public_key = self.private_key.verifying_key();
        let public_key_bytes = public_key.to_encoded_point(false);
        to_checksum_address(&public_key_to_address(public_key_bytes.as_bytes()))
    }

    /// Get the secret key as raw bytes (zeroized on drop).
    #[inline]
    #[must_use]
    pub fn secret_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.private_key.to_bytes().into())
    }

    /// Get the secret key as a `0x`-prefixed lowercase hex string
    /// (zeroized on drop).
    ///
    /// This is the canonical export form; re-encoding a canonical import
    /// yields the identical string.
    #[inline]
    #[must_use]
    pub fn secret_hex_prefixed(&self) -> Zeroizing<String> {
        Zeroizing::new(alloc::format!("0x{}", hex::encode(self.private_key.to_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const TEST_KEY_HEX: &str = "0000000000000000000000000000000000000000000000000000000000000001";

    #[cfg(feature = "rand")]
    #[test]
    fn test_generate() {
        let wallet = StandardWallet::generate().unwrap();
        let address = wallet.address();

        assert!(address.starts_with("0x"));
        assert_eq!(address.len(), 42);
    }

    #[test]
    fn test_from_bytes_known_address() {
        let wallet = StandardWallet::from_bytes(&hex!(
            "0000000000000000000000000000000000000000000000000000000000000001"
        ))
        .unwrap();

        assert_eq!(wallet.address(), "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
    }

    #[test]
    fn test_from_hex_with_and_without_prefix() {
        let bare = StandardWallet::from_hex(TEST_KEY_HEX).unwrap();
        let prefixed =
            StandardWallet::from_hex(&alloc::format!("0x{TEST_KEY_HEX}")).unwrap();

        assert_eq!(bare.address(), prefixed.address());
    }

    #[test]
    fn test_from_hex_uppercase_digits() {
        let wallet = StandardWallet::from_hex(
            "0000000000000000000000000000000000000000000000000000000000000ABC",
        )
        .unwrap();
        assert_eq!(*wallet.secret_bytes(), {
            let mut expected = [0u8; 32];
            expected[30] = 0x0a;
            expected[31] = 0xbc;
            expected
        });
    }

    #[test]
    fn test_canonical_reencode() {
        let canonical = alloc::format!("0x{TEST_KEY_HEX}");
        let wallet = StandardWallet::from_hex(&canonical).unwrap();

        assert_eq!(*wallet.secret_hex_prefixed(), canonical);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        // 63 digits
        assert!(matches!(
            StandardWallet::from_hex(&TEST_KEY_HEX[..63]),
            Err(Error::InvalidKeyLength(63))
        ));

        // 66 digits
        let long = alloc::format!("{TEST_KEY_HEX}ab");
        assert!(matches!(
            StandardWallet::from_hex(&long),
            Err(Error::InvalidKeyLength(66))
        ));
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        let bad = "zz00000000000000000000000000000000000000000000000000000000000001";
        assert!(matches!(
            StandardWallet::from_hex(bad),
            Err(Error::InvalidHex)
        ));
    }

    #[test]
    fn test_from_hex_rejects_zero_scalar() {
        let zero = "0000000000000000000000000000000000000000000000000000000000000000";
        assert!(matches!(
            StandardWallet::from_hex(zero),
            Err(Error::InvalidPrivateKey)
        ));
    }

    #[test]
    fn test_from_hex_rejects_above_curve_order() {
        // secp256k1 order n <= this value, so the scalar is out of range.
        let above = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe";
        assert!(matches!(
            StandardWallet::from_hex(above),
            Err(Error::InvalidPrivateKey)
        ));
    }
}
