//! Text analysis for transaction memos.
//!
//! Memos are free text ("Starbucks Coffee #1912") and every downstream
//! computation works on a normalized bag of words, so the analysis layer
//! is a single tokenizer that reduces a memo to its canonical token set.

pub mod tokenizer;

pub use tokenizer::{MemoTokenizer, tokenize};
