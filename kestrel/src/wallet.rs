//! Unified wallet type for multi-chain key derivation.

use alloc::string::{String, ToString};
use core::fmt;

use bip39::{Language, Mnemonic};
use zeroize::{Zeroize, Zeroizing};

use crate::Error;

/// A unified HD wallet that can derive keys for multiple chains.
///
/// This wallet holds a BIP-39 mnemonic and the seed derived from it. The
/// seed can be used by chain-specific derivers (Solana, Ethereum) to
/// generate addresses following their respective standards.
///
/// # Passphrase Support
///
/// The wallet supports an optional BIP-39 passphrase (sometimes called
/// "25th word"). The same mnemonic with different passphrases produces
/// completely different wallets.
pub struct Wallet {
    /// BIP-39 mnemonic phrase, normalized to single spaces and lowercase.
    mnemonic: Zeroizing<String>,
    /// Seed derived from mnemonic + passphrase.
    seed: Zeroizing<[u8; 64]>,
    /// Whether a passphrase was used.
    has_passphrase: bool,
}

impl Wallet {
    /// Generate a new wallet with a random mnemonic.
    ///
    /// Entropy comes from the operating system CSPRNG. If the entropy
    /// source fails the error is fatal; no weaker fallback is attempted.
    ///
    /// # Arguments
    ///
    /// * `word_count` - Number of words (12, 15, 18, 21, or 24)
    /// * `passphrase` - Optional BIP-39 passphrase for additional security
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordCount`] for an unsupported word count and
    /// [`Error::Entropy`] if the OS entropy source fails.
    #[cfg(feature = "rand")]
    pub fn generate(word_count: usize, passphrase: Option<&str>) -> Result<Self, Error> {
        let entropy_len = match word_count {
            12 => 16,
            15 => 20,
            18 => 24,
            21 => 28,
            24 => 32,
            other => return Err(Error::InvalidWordCount(other)),
        };

        let mut entropy = [0u8; 32];
        getrandom::fill(&mut entropy[..entropy_len]).map_err(|_| Error::Entropy)?;
        let wallet = Self::from_entropy(&entropy[..entropy_len], passphrase);
        entropy.zeroize();
        wallet
    }

    /// Create a wallet from raw entropy bytes.
    ///
    /// This is useful in `no_std` environments where you provide your own
    /// entropy source instead of relying on the system RNG.
    ///
    /// # Arguments
    ///
    /// * `entropy` - Raw entropy bytes (16, 20, 24, 28, or 32 bytes for 12-24 words)
    /// * `passphrase` - Optional BIP-39 passphrase
    ///
    /// # Errors
    ///
    /// Returns an error if the entropy length is invalid.
    pub fn from_entropy(entropy: &[u8], passphrase: Option<&str>) -> Result<Self, Error> {
        let mnemonic = Mnemonic::from_entropy(entropy)?;
        Ok(Self::from_parsed(&mnemonic, passphrase))
    }

    /// Create a wallet from an existing mnemonic phrase.
    ///
    /// The phrase is whitespace- and case-normalized before validation, so
    /// user input with stray spacing or capitalization is accepted.
    ///
    /// # Arguments
    ///
    /// * `phrase` - BIP-39 mnemonic phrase
    /// * `passphrase` - Optional BIP-39 passphrase
    ///
    /// # Errors
    ///
    /// Returns an error if the mnemonic is invalid.
    pub fn from_mnemonic(phrase: &str, passphrase: Option<&str>) -> Result<Self, Error> {
        let normalized = crate::mnemonic::normalize(phrase);
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, &normalized)?;
        Ok(Self::from_parsed(&mnemonic, passphrase))
    }

    fn from_parsed(mnemonic: &Mnemonic, passphrase: Option<&str>) -> Self {
        let passphrase_str = passphrase.unwrap_or("");
        let seed_bytes = mnemonic.to_seed_normalized(passphrase_str);

        Self {
            mnemonic: Zeroizing::new(mnemonic.to_string()),
            seed: Zeroizing::new(seed_bytes),
            has_passphrase: !passphrase_str.is_empty(),
        }
    }

    /// Get the mnemonic phrase.
    ///
    /// **Security Warning**: Handle this value carefully as it can
    /// reconstruct all derived keys.
    #[inline]
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Get the seed bytes for key derivation.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> &[u8; 64] {
        &self.seed
    }

    /// Check if a passphrase was used to derive the seed.
    #[must_use]
    pub const fn has_passphrase(&self) -> bool {
        self.has_passphrase
    }

    /// Get the word count of the mnemonic.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.mnemonic.split_whitespace().count()
    }
}

// Manual Debug: the phrase and seed must never reach a log sink.
impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("mnemonic", &"[REDACTED]")
            .field("seed", &"[REDACTED]")
            .field("has_passphrase", &self.has_passphrase)
            .finish()
    }
}
