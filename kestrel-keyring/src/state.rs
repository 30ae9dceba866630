//! Wallet state and its pure transition operations.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use kestrel::Wallet;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::account::{AccountId, AccountOrigin, AccountRecord, Chain};
use crate::Error;

/// Check whether externally supplied private key text can be imported for
/// the given chain.
///
/// The key object is fully reconstructed before `true` is returned:
/// well-formed text encoding an invalid scalar or an inconsistent keypair
/// fails. Never panics or errors.
#[must_use]
pub fn validate_import_candidate(chain: Chain, text: &str) -> bool {
    match chain {
        Chain::Solana => kestrel_sol::StandardWallet::from_base58(text).is_ok(),
        Chain::Ethereum => kestrel_evm::StandardWallet::from_hex(text).is_ok(),
    }
}

/// The complete state of one wallet: the recovery phrase (absent when the
/// wallet holds only imported accounts), the ordered account list, and the
/// per-chain derivation counters.
///
/// `WalletState` is an immutable snapshot. Every operation returns a new
/// state and leaves `self` untouched; callers apply mutations sequentially
/// against the latest snapshot and hand finished snapshots to their
/// persistence layer. The serde representation is the persistence wire
/// shape.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    /// Recovery phrase, normalized; `None` for an import-only wallet.
    mnemonic: Option<String>,
    /// Accounts in insertion order.
    accounts: Vec<AccountRecord>,
    /// Next Solana derivation index. Never decremented or reused.
    next_solana_index: u32,
    /// Next Ethereum derivation index. Never decremented or reused.
    next_ethereum_index: u32,
    /// Next account id. Never decremented or reused.
    next_account_id: u64,
}

impl WalletState {
    /// Create an empty wallet with no phrase and no accounts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mnemonic: None,
            accounts: Vec::new(),
            next_solana_index: 0,
            next_ethereum_index: 0,
            next_account_id: 0,
        }
    }

    /// Create a wallet with a freshly generated 12-word recovery phrase.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS entropy source fails; no weaker
    /// randomness is ever substituted.
    #[cfg(feature = "rand")]
    pub fn generate() -> Result<Self, Error> {
        let wallet = Wallet::generate(12, None)?;
        Ok(Self {
            mnemonic: Some(wallet.mnemonic().to_string()),
            ..Self::new()
        })
    }

    /// Create a wallet from an existing recovery phrase.
    ///
    /// The phrase is whitespace- and case-normalized, then fully validated
    /// (word count, wordlist, checksum).
    ///
    /// # Errors
    ///
    /// Returns an error if the phrase is not a valid BIP-39 mnemonic.
    pub fn from_phrase(phrase: &str) -> Result<Self, Error> {
        let wallet = Wallet::from_mnemonic(phrase, None)?;
        Ok(Self {
            mnemonic: Some(wallet.mnemonic().to_string()),
            ..Self::new()
        })
    }

    /// The wallet's recovery phrase, if any.
    #[must_use]
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }

    /// All accounts in insertion order.
    #[must_use]
    pub fn accounts(&self) -> &[AccountRecord] {
        &self.accounts
    }

    /// Accounts belonging to one chain, preserving relative insertion order.
    #[must_use]
    pub fn accounts_for(&self, chain: Chain) -> Vec<&AccountRecord> {
        self.accounts.iter().filter(|a| a.chain == chain).collect()
    }

    /// Look up an account by id.
    #[must_use]
    pub fn account(&self, id: AccountId) -> Option<&AccountRecord> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// The next derivation index for a chain.
    ///
    /// Indices are a property of withdrawn slots, not of the account list
    /// length: removing an account never frees its index.
    #[must_use]
    pub const fn next_index(&self, chain: Chain) -> u32 {
        match chain {
            Chain::Solana => self.next_solana_index,
            Chain::Ethereum => self.next_ethereum_index,
        }
    }

    /// Derive a new HD account on the given chain and append it.
    ///
    /// Reads the chain's current derivation index, derives the key pair
    /// from the wallet phrase, and returns the new record together with a
    /// state whose index counter (for that chain only) has advanced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] if the wallet has no recovery
    /// phrase; derivation errors indicate a caller bug and are propagated.
    pub fn create_account(
        &self,
        chain: Chain,
        name: Option<&str>,
    ) -> Result<(AccountRecord, Self), Error> {
        let phrase = self.mnemonic.as_deref().ok_or(Error::NotInitialized)?;
        let wallet = Wallet::from_mnemonic(phrase, None)?;
        let index = self.next_index(chain);

        let (public_key, path) = match chain {
            Chain::Solana => {
                let derived = kestrel_sol::Deriver::new(&wallet).derive(index)?;
                (derived.address, derived.path)
            }
            Chain::Ethereum => {
                let derived = kestrel_evm::Deriver::new(&wallet).derive(index)?;
                (derived.address, derived.path)
            }
        };

        let record = AccountRecord {
            id: AccountId(self.next_account_id),
            name: self.resolve_name(name),
            chain,
            public_key,
            origin: AccountOrigin::Derived { index, path },
        };

        let mut next = self.clone();
        next.next_account_id += 1;
        match chain {
            Chain::Solana => next.next_solana_index += 1,
            Chain::Ethereum => next.next_ethereum_index += 1,
        }
        next.accounts.push(record.clone());

        Ok((record, next))
    }

    /// Import an account from externally supplied private key text.
    ///
    /// Accepts what [`validate_import_candidate`] accepts; the stored key
    /// text is the canonical normalized form (Base58 64-byte keypair for
    /// Solana, `0x` + 64 lowercase hex digits for Ethereum). Imports do not
    /// touch the derivation counters.
    ///
    /// Returns `None` on any decode or validation failure; bad key text is
    /// user input, not an error.
    #[must_use]
    pub fn import_account(
        &self,
        chain: Chain,
        text: &str,
        name: Option<&str>,
    ) -> Option<(AccountRecord, Self)> {
        let (public_key, private_key) = match chain {
            Chain::Solana => {
                let imported = kestrel_sol::StandardWallet::from_base58(text).ok()?;
                (imported.address(), imported.keypair_base58().to_string())
            }
            Chain::Ethereum => {
                let imported = kestrel_evm::StandardWallet::from_hex(text).ok()?;
                (imported.address(), imported.secret_hex_prefixed().to_string())
            }
        };

        let record = AccountRecord {
            id: AccountId(self.next_account_id),
            name: self.resolve_name(name),
            chain,
            public_key,
            origin: AccountOrigin::Imported { private_key },
        };

        let mut next = self.clone();
        next.next_account_id += 1;
        next.accounts.push(record.clone());

        Some((record, next))
    }

    /// Remove an account by id.
    ///
    /// Idempotent: an unknown id returns an unchanged state. The chain's
    /// derivation counter is never decremented.
    #[must_use]
    pub fn remove_account(&self, id: AccountId) -> Self {
        let mut next = self.clone();
        next.accounts.retain(|a| a.id != id);
        next
    }

    /// Rename an account.
    ///
    /// The new name is trimmed; an unknown id or an empty/whitespace-only
    /// name leaves the state unchanged (names stay non-empty).
    #[must_use]
    pub fn rename_account(&self, id: AccountId, new_name: &str) -> Self {
        let trimmed = new_name.trim();
        let mut next = self.clone();
        if !trimmed.is_empty() {
            if let Some(account) = next.accounts.iter_mut().find(|a| a.id == id) {
                account.name = trimmed.to_string();
            }
        }
        next
    }

    /// Reveal the private key of an account.
    ///
    /// Imported accounts return their stored key text verbatim; HD accounts
    /// re-derive from the wallet phrase at the record's chain and index.
    /// Returns `None` for an unknown id, or for an HD account when the
    /// phrase is absent.
    #[must_use]
    pub fn reveal_private_key(&self, id: AccountId) -> Option<Zeroizing<String>> {
        let record = self.account(id)?;

        if let Some(stored) = record.imported_private_key() {
            return Some(Zeroizing::new(stored.to_string()));
        }

        let index = u32::try_from(record.index()).ok()?;
        let phrase = self.mnemonic.as_deref()?;
        let wallet = Wallet::from_mnemonic(phrase, None).ok()?;

        match record.chain {
            Chain::Solana => kestrel_sol::Deriver::new(&wallet)
                .derive(index)
                .ok()
                .map(|derived| derived.keypair_base58),
            Chain::Ethereum => kestrel_evm::Deriver::new(&wallet)
                .derive(index)
                .ok()
                .map(|derived| Zeroizing::new(format!("0x{}", derived.private_key_hex.as_str()))),
        }
    }

    fn resolve_name(&self, name: Option<&str>) -> String {
        match name.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
            _ => format!("Account {}", self.accounts.len() + 1),
        }
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug: the phrase must never reach a log sink.
impl fmt::Debug for WalletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletState")
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "[REDACTED]"))
            .field("accounts", &self.accounts)
            .field("next_solana_index", &self.next_solana_index)
            .field("next_ethereum_index", &self.next_ethereum_index)
            .field("next_account_id", &self.next_account_id)
            .finish()
    }
}
