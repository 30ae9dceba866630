//! BIP-39 mnemonic utilities.
//!
//! This module provides helper functions for working with BIP-39 mnemonic
//! phrases: normalization, full-phrase validation, and prefix-based word
//! expansion.
//!
//! # Prefix Expansion
//!
//! The BIP-39 English wordlist is designed so that every word is uniquely
//! identifiable by its first 4 characters. [`expand`] leverages that
//! property to allow users to type abbreviated words and have them
//! automatically expanded to full BIP-39 words.
//!
//! # Example
//!
//! ```
//! use kestrel::mnemonic;
//!
//! let expanded = mnemonic::expand("aban aban aban aban aban aban aban aban aban aban aban abou").unwrap();
//! assert!(mnemonic::validate(&expanded));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use bip39::{Language, Mnemonic};

use crate::Error;

/// Minimum prefix length required for unambiguous word expansion.
///
/// BIP-39 English wordlist guarantees uniqueness at 4 characters.
const MIN_PREFIX_LEN: usize = 4;

/// Normalize a candidate phrase: collapse whitespace runs, strip leading and
/// trailing whitespace, lowercase every word.
pub fn normalize(phrase: &str) -> String {
    let mut result = String::with_capacity(phrase.len());
    for (i, word) in phrase.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        for ch in word.chars() {
            result.extend(ch.to_lowercase());
        }
    }
    result
}

/// Check whether a candidate phrase is a valid BIP-39 mnemonic.
///
/// Performs full validation (word count, wordlist membership, checksum)
/// after [`normalize`]-ing the input. Never panics or errors: any malformed
/// input simply yields `false`.
pub fn validate(candidate: &str) -> bool {
    let normalized = normalize(candidate);
    if normalized.is_empty() {
        return false;
    }
    Mnemonic::parse_in_normalized(Language::English, &normalized).is_ok()
}

/// Check whether a single word is in the BIP-39 English wordlist.
pub fn is_valid_word(word: &str) -> bool {
    Language::English.word_list().binary_search(&word).is_ok()
}

/// Expand abbreviated words in a mnemonic phrase to their full BIP-39 form.
///
/// Each whitespace-separated token is matched against the BIP-39 wordlist:
/// - If the token is an exact match, it is kept as-is.
/// - If the token is a prefix (>= 4 characters) that uniquely identifies
///   a single word, it is expanded to that word.
/// - Otherwise, an error is returned.
///
/// # Errors
///
/// Returns [`Error::UnknownPrefix`] if a token does not match any word.
/// Returns [`Error::AmbiguousPrefix`] if a token matches multiple words.
/// Returns [`Error::PrefixTooShort`] if a non-exact token has fewer than 4 characters.
pub fn expand(phrase: &str) -> Result<String, Error> {
    expand_in(Language::English, phrase)
}

/// Expand abbreviated words using the specified language wordlist.
///
/// See [`expand`] for details.
///
/// # Errors
///
/// Returns [`Error::UnknownPrefix`] if a token does not match any word.
/// Returns [`Error::AmbiguousPrefix`] if a token matches multiple words.
/// Returns [`Error::PrefixTooShort`] if a non-exact token has fewer than 4 characters.
pub fn expand_in(language: Language, phrase: &str) -> Result<String, Error> {
    let word_list = language.word_list();
    let tokens: Vec<&str> = phrase.split_whitespace().collect();

    let mut result = String::new();
    for (i, token) in tokens.iter().enumerate() {
        let word = resolve_token(word_list, token)?;
        if i > 0 {
            result.push(' ');
        }
        result.push_str(word);
    }
    Ok(result)
}

/// Resolve a single token against the wordlist.
///
/// Returns the full word if the token is an exact match or a unique prefix.
fn resolve_token<'a>(word_list: &'a [&'a str; 2048], token: &str) -> Result<&'a str, Error> {
    // Fast path: exact match via binary search (wordlist is sorted).
    if let Ok(pos) = word_list.binary_search(&token) {
        return Ok(word_list[pos]);
    }

    // Token is not an exact word — treat as prefix.
    if token.len() < MIN_PREFIX_LEN {
        return Err(Error::PrefixTooShort {
            prefix: String::from(token),
            min_len: MIN_PREFIX_LEN,
        });
    }

    let mut matches: Vec<&str> = Vec::new();
    for &word in word_list {
        if word.starts_with(token) {
            matches.push(word);
        }
    }

    match matches.len() {
        0 => Err(Error::UnknownPrefix(String::from(token))),
        1 => Ok(matches[0]),
        _ => Err(Error::AmbiguousPrefix {
            prefix: String::from(token),
            candidates: matches.iter().map(|w| String::from(*w)).collect(),
        }),
    }
}
