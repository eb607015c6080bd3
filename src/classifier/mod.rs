//! Category inference for transaction memos.
//!
//! Given a snapshot of the transaction store, a classifier predicts the
//! most probable category for a candidate memo's word set, learning only
//! from the transactions labeled so far. Two strategies are provided
//! behind a common contract:
//!
//! - [`WordProbabilityClassifier`]: Laplace-smoothed word-presence
//!   likelihood ratios, deterministic and cheap
//! - [`LogisticRegressionClassifier`]: per-category linear weights fitted
//!   by randomized coordinate hill-climbing
//!
//! # Architecture
//!
//! - [`Classifier`] trait: common interface for all strategies
//! - [`ClassifierKind`] / [`ClassifierConfig`]: strategy selection and
//!   per-strategy parameters
//! - [`predict`]: one-shot entry point that tokenizes, builds the
//!   configured strategy, and dispatches
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use memocat::classifier::{self, ClassifierConfig};
//! use memocat::transaction::Transaction;
//! use memocat::vocabulary::CategoryVocabulary;
//!
//! # fn main() -> memocat::error::Result<()> {
//! let store = vec![
//!     Transaction::new(
//!         NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
//!         4.50,
//!         "Starbucks Coffee",
//!         Some("Coffee".to_string()),
//!     ),
//!     Transaction::new(
//!         NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
//!         60.00,
//!         "Shell Gas",
//!         Some("Travel".to_string()),
//!     ),
//! ];
//! let vocabulary = CategoryVocabulary::default();
//!
//! let category = classifier::predict(
//!     "Starbucks Latte",
//!     &store,
//!     &vocabulary,
//!     &ClassifierConfig::default(),
//! )?;
//! assert_eq!(category.as_deref(), Some("Coffee"));
//! # Ok(())
//! # }
//! ```

mod classifier;
pub mod logistic_regression;
mod selector;
mod types;
pub mod word_probability;

use ahash::AHashSet;

// Public exports
pub use classifier::Classifier;
pub use logistic_regression::{LogisticRegressionClassifier, LogisticRegressionConfig};
pub use selector::{ClassifierConfig, ClassifierKind, new_logistic_regression, new_word_probability};
pub use types::{CombinedProbability, WordProbability};
pub use word_probability::{WordProbabilityClassifier, WordProbabilityConfig};

use crate::analysis::tokenize;
use crate::error::Result;
use crate::transaction::Transaction;
use crate::vocabulary::CategoryVocabulary;

/// Predict the category for a candidate memo text.
///
/// Tokenizes the memo, builds the strategy named by `config`, and
/// dispatches to it. The only error source is an invalid configuration;
/// the prediction itself folds every edge case into `None`.
pub fn predict(
    memo: &str,
    store: &[Transaction],
    vocabulary: &CategoryVocabulary,
    config: &ClassifierConfig,
) -> Result<Option<String>> {
    let classifier = config.build()?;
    Ok(classifier.predict(&tokenize(memo), store, vocabulary))
}

/// The transactions the classifiers may learn from: those whose category
/// is present.
pub(crate) fn labeled_transactions(store: &[Transaction]) -> Vec<&Transaction> {
    store.iter().filter(|t| t.category().is_some()).collect()
}

/// The distinct words across the given transactions, sorted so that
/// iteration order (and therefore floating-point summation order) is
/// stable between calls.
pub(crate) fn vocabulary_words<'a>(transactions: &[&'a Transaction]) -> Vec<&'a str> {
    let mut words: Vec<&str> = transactions
        .iter()
        .flat_map(|t| t.words().iter().map(String::as_str))
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}

/// Whether the candidate memo shares at least one word with the labeled
/// vocabulary. A candidate with no overlap has no meaningful score.
pub(crate) fn overlaps_vocabulary(memo_words: &AHashSet<String>, vocab_words: &[&str]) -> bool {
    vocab_words.iter().any(|word| memo_words.contains(*word))
}
