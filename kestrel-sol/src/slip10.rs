//! SLIP-0010 Ed25519 key derivation.
//!
//! Implements SLIP-0010 for deriving Ed25519 keys from a seed.
//! Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md

use alloc::string::String;
use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::Error;

type HmacSha512 = Hmac<Sha512>;

const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// SLIP-0010 derived key pair.
pub struct DerivedKey {
    /// 32-byte private key.
    pub private_key: Zeroizing<[u8; 32]>,
    /// 32-byte chain code.
    pub chain_code: Zeroizing<[u8; 32]>,
}

impl DerivedKey {
    /// Derive master key from seed using SLIP-0010.
    pub fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        let mut mac =
            HmacSha512::new_from_slice(ED25519_CURVE).map_err(|_| Error::InvalidSeedLength)?;
        mac.update(seed);
        let result = mac.finalize().into_bytes();

        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);

        private_key.copy_from_slice(&result[..32]);
        chain_code.copy_from_slice(&result[32..]);

        Ok(Self {
            private_key,
            chain_code,
        })
    }

    /// Derive child key at hardened index.
    ///
    /// SLIP-0010 only supports hardened derivation for Ed25519.
    pub fn derive_hardened(&self, index: u32) -> Result<Self, Error> {
        let hardened_index = index | 0x8000_0000;

        let mut mac =
            HmacSha512::new_from_slice(&*self.chain_code).map_err(|_| Error::InvalidSeedLength)?;

        // For hardened derivation: 0x00 || private_key || index
        mac.update(&[0x00]);
        mac.update(&*self.private_key);
        mac.update(&hardened_index.to_be_bytes());

        let result = mac.finalize().into_bytes();

        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);

        private_key.copy_from_slice(&result[..32]);
        chain_code.copy_from_slice(&result[32..]);

        Ok(Self {
            private_key,
            chain_code,
        })
    }

    /// Derive key at the account path: m/44'/501'/index'/0'
    ///
    /// Note: Solana uses all hardened derivation.
    pub fn derive_account_path(seed: &[u8], index: u32) -> Result<Self, Error> {
        let master = Self::from_seed(seed)?;

        // m/44'
        let purpose = master.derive_hardened(44)?;
        // m/44'/501'
        let coin_type = purpose.derive_hardened(crate::COIN_TYPE)?;
        // m/44'/501'/index'
        let account = coin_type.derive_hardened(index)?;
        // m/44'/501'/index'/0'
        let change = account.derive_hardened(0)?;

        Ok(change)
    }

    /// Convert to Ed25519 signing key.
    pub fn to_signing_key(&self) -> SigningKey {
        SigningKey::from_bytes(&self.private_key)
    }

    /// Format the derivation path string for an account index.
    pub fn format_path(index: u32) -> String {
        alloc::format!("m/44'/{}'/{index}'/0'", crate::COIN_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // Test vector 1 for ed25519 from the SLIP-0010 specification.
    const VECTOR_SEED: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

    #[test]
    fn test_slip0010_vector_master() {
        let master = DerivedKey::from_seed(&VECTOR_SEED).unwrap();

        assert_eq!(
            *master.private_key,
            hex!("2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7")
        );
        assert_eq!(
            *master.chain_code,
            hex!("90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb")
        );
    }

    #[test]
    fn test_slip0010_vector_child() {
        let master = DerivedKey::from_seed(&VECTOR_SEED).unwrap();
        let child = master.derive_hardened(0).unwrap();

        assert_eq!(
            *child.private_key,
            hex!("68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3")
        );
    }

    #[test]
    fn test_account_path_derivation() {
        let seed = [0u8; 64];
        let derived = DerivedKey::derive_account_path(&seed, 0).unwrap();

        assert_eq!(derived.private_key.len(), 32);
    }

    #[test]
    fn test_format_path() {
        assert_eq!(DerivedKey::format_path(0), "m/44'/501'/0'/0'");
        assert_eq!(DerivedKey::format_path(7), "m/44'/501'/7'/0'");
    }
}
