//! Encoding utilities shared by the chain-specific crates.

use alloc::string::String;

/// Computes EIP-55 checksum encoding for an Ethereum address.
///
/// Returns a `0x`-prefixed address string with mixed-case hex characters:
/// a hex letter is uppercased when the corresponding nibble of the
/// Keccak-256 hash of the lowercase address is `>= 8`.
pub fn eip55_checksum(address: &[u8; 20]) -> String {
    let hex_addr = hex::encode(address);
    let hash = crate::hash::keccak256(hex_addr.as_bytes());

    let mut result = String::with_capacity(42);
    result.push_str("0x");
    for (i, ch) in hex_addr.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if ch.is_ascii_alphabetic() && nibble >= 8 {
            result.push(ch.to_ascii_uppercase());
        } else {
            result.push(ch);
        }
    }
    result
}
