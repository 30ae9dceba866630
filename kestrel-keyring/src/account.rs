//! Account records and their identity types.

use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Derivation path label for accounts imported from raw key material.
pub const IMPORTED_PATH: &str = "imported";

/// The chains an account can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Solana (Ed25519, SLIP-0010 hardened derivation, coin type 501).
    Solana,
    /// Ethereum (secp256k1, BIP-32 derivation, coin type 60).
    Ethereum,
}

impl Chain {
    /// BIP-44 coin type for this chain.
    #[must_use]
    pub const fn coin_type(self) -> u32 {
        match self {
            Self::Solana => kestrel_sol::COIN_TYPE,
            Self::Ethereum => kestrel_evm::COIN_TYPE,
        }
    }

    /// Lowercase chain name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solana => "solana",
            Self::Ethereum => "ethereum",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable identity of an account within one wallet.
///
/// Ids are allocated from a monotonic counter carried in the wallet state,
/// so they stay unique under arbitrarily rapid successive creation and
/// never collide after removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an account's key material is obtained.
///
/// The two variants are mutually exclusive by construction: a derived
/// account carries no key material (it is re-derived on demand from the
/// wallet phrase), an imported account carries the only copy of its key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountOrigin {
    /// Derived from the wallet's recovery phrase at a per-chain index.
    #[serde(rename_all = "camelCase")]
    Derived {
        /// Per-chain derivation index.
        index: u32,
        /// Rendered derivation path (e.g., `m/44'/501'/0'/0'`).
        path: String,
    },
    /// Imported from externally supplied key material.
    #[serde(rename_all = "camelCase")]
    Imported {
        /// Normalized private key text, stored verbatim because it cannot
        /// be re-derived.
        private_key: String,
    },
}

// Manual Debug: an imported private key must never reach a log sink.
impl fmt::Debug for AccountOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Derived { index, path } => f
                .debug_struct("Derived")
                .field("index", index)
                .field("path", path)
                .finish(),
            Self::Imported { .. } => f
                .debug_struct("Imported")
                .field("private_key", &"[REDACTED]")
                .finish(),
        }
    }
}

/// One account in the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    /// Stable unique id within this wallet.
    pub id: AccountId,
    /// Display name; always non-empty.
    pub name: String,
    /// Chain this account belongs to.
    pub chain: Chain,
    /// Chain-native public key text (Base58 for Solana, EIP-55 address for
    /// Ethereum).
    pub public_key: String,
    /// Where the account's key material comes from.
    pub origin: AccountOrigin,
}

impl AccountRecord {
    /// Whether this account was imported from raw key material.
    #[must_use]
    pub const fn is_imported(&self) -> bool {
        matches!(self.origin, AccountOrigin::Imported { .. })
    }

    /// The rendered derivation path, or `"imported"` for imported accounts.
    #[must_use]
    pub fn derivation_path(&self) -> &str {
        match &self.origin {
            AccountOrigin::Derived { path, .. } => path,
            AccountOrigin::Imported { .. } => IMPORTED_PATH,
        }
    }

    /// The per-chain derivation index, or `-1` for imported accounts.
    #[must_use]
    pub const fn index(&self) -> i64 {
        match self.origin {
            AccountOrigin::Derived { index, .. } => index as i64,
            AccountOrigin::Imported { .. } => -1,
        }
    }

    /// The stored private key text of an imported account.
    pub(crate) fn imported_private_key(&self) -> Option<&str> {
        match &self.origin {
            AccountOrigin::Imported { private_key } => Some(private_key),
            AccountOrigin::Derived { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn imported_record() -> AccountRecord {
        AccountRecord {
            id: AccountId(3),
            name: "Cold".to_string(),
            chain: Chain::Ethereum,
            public_key: "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf".to_string(),
            origin: AccountOrigin::Imported {
                private_key:
                    "0x0000000000000000000000000000000000000000000000000000000000000001"
                        .to_string(),
            },
        }
    }

    #[test]
    fn test_chain_coin_types() {
        assert_eq!(Chain::Solana.coin_type(), 501);
        assert_eq!(Chain::Ethereum.coin_type(), 60);
    }

    #[test]
    fn test_imported_accessors() {
        let record = imported_record();
        assert!(record.is_imported());
        assert_eq!(record.derivation_path(), "imported");
        assert_eq!(record.index(), -1);
    }

    #[test]
    fn test_derived_accessors() {
        let record = AccountRecord {
            id: AccountId(0),
            name: "Account 1".to_string(),
            chain: Chain::Solana,
            public_key: "11111111111111111111111111111111".to_string(),
            origin: AccountOrigin::Derived {
                index: 4,
                path: "m/44'/501'/4'/0'".to_string(),
            },
        };
        assert!(!record.is_imported());
        assert_eq!(record.derivation_path(), "m/44'/501'/4'/0'");
        assert_eq!(record.index(), 4);
    }

    #[test]
    fn test_debug_does_not_leak_imported_key() {
        let record = imported_record();
        let output = alloc::format!("{record:?}");
        assert!(!output.contains("000000000000000000000001"));
        assert!(output.contains("REDACTED"));
    }
}
