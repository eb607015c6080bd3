//! # memocat
//!
//! An in-memory category inference engine for personal bank transactions.
//!
//! Given a growing, mutable set of user-labeled and unlabeled
//! transactions, memocat predicts the most probable spending category for
//! a new or edited transaction's free-text memo, using only the
//! transactions seen so far. There is no external corpus and no trained
//! state carried between calls: the active classifier retrains from the
//! live transaction set on every prediction, so it is always consistent
//! with the labels the user has accepted.
//!
//! ## Features
//!
//! - Pure Rust, fully in-memory
//! - Bag-of-normalized-words memo analysis
//! - Two interchangeable strategies behind one contract: a smoothed
//!   word-probability classifier and a gradient-free logistic-regression
//!   classifier
//! - Graceful handling of zero and sparse training data: every edge case
//!   folds into "no prediction" rather than an error

pub mod analysis;
pub mod categorizer;
pub mod classifier;
pub mod error;
pub mod transaction;
pub mod vocabulary;

pub mod prelude {
    //! Convenient re-exports of the main memocat types.

    pub use crate::categorizer::Categorizer;
    pub use crate::classifier::{Classifier, ClassifierConfig, ClassifierKind};
    pub use crate::error::{MemocatError, Result};
    pub use crate::transaction::{Transaction, TransactionStore};
    pub use crate::vocabulary::CategoryVocabulary;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
