//! Cryptographic hash functions used in key and address encoding.

use sha3::{Digest, Keccak256};

/// Compute Keccak-256 hash (used in Ethereum address derivation)
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
