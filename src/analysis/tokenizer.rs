//! Memo tokenizer implementation.
//!
//! The tokenizer normalizes free text into a canonical set of word
//! tokens: the input is split on whitespace, every character that is not
//! an ASCII letter is stripped from each piece, the result is lowercased,
//! empty pieces are discarded, and duplicates collapse into a set. Order
//! and multiplicity are irrelevant to every downstream computation.
//!
//! # Examples
//!
//! ```
//! use memocat::analysis::tokenize;
//!
//! let words = tokenize("Coffee, Shop!!");
//! assert_eq!(words.len(), 2);
//! assert!(words.contains("coffee"));
//! assert!(words.contains("shop"));
//!
//! assert!(tokenize("").is_empty());
//! ```

use ahash::AHashSet;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_LETTER: Regex = Regex::new("[^A-Za-z]").expect("pattern is valid");
}

/// Normalize free text into its canonical set of word tokens.
///
/// Pure, total, and deterministic: there are no failure modes, and empty
/// or whitespace-only input yields the empty set.
pub fn tokenize(text: &str) -> AHashSet<String> {
    text.split_whitespace()
        .map(|piece| NON_LETTER.replace_all(piece, "").to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// A tokenizer that reduces transaction memos to normalized word sets.
///
/// This is a stateless wrapper around [`tokenize`] for callers that want
/// to hold the tokenizer as a value.
#[derive(Clone, Debug, Default)]
pub struct MemoTokenizer;

impl MemoTokenizer {
    /// Create a new memo tokenizer.
    pub fn new() -> Self {
        MemoTokenizer
    }

    /// Tokenize the given text into a set of normalized words.
    pub fn tokenize(&self, text: &str) -> AHashSet<String> {
        tokenize(text)
    }

    /// Get the name of this tokenizer (for debugging and configuration).
    pub fn name(&self) -> &'static str {
        "memo"
    }
}
