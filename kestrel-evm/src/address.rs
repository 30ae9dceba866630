//! Ethereum address derivation with EIP-55 checksum encoding.

use alloc::string::String;

use kestrel::hash::keccak256;

/// Derive the 20-byte Ethereum address from an uncompressed SEC1 public key.
///
/// The input is the 65-byte encoded point (`0x04 || x || y`); the address
/// is the last 20 bytes of the Keccak-256 hash of `x || y`.
#[must_use]
pub fn public_key_to_address(uncompressed: &[u8]) -> [u8; 20] {
    debug_assert_eq!(uncompressed.len(), 65);
    debug_assert_eq!(uncompressed[0], 0x04);

    let hash = keccak256(&uncompressed[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Convert a raw 20-byte address to its EIP-55 checksummed string form.
#[must_use]
pub fn to_checksum_address(address: &[u8; 20]) -> String {
    kestrel::encoding::eip55_checksum(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_known_public_key() {
        // Private key 0x...01 has a well-known address.
        let key = k256::ecdsa::SigningKey::from_slice(&hex!(
            "0000000000000000000000000000000000000000000000000000000000000001"
        ))
        .unwrap();
        let point = key.verifying_key().to_encoded_point(false);
        let address = public_key_to_address(point.as_bytes());

        assert_eq!(
            to_checksum_address(&address),
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
        );
    }
}
