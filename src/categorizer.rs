//! High-level categorization facade.
//!
//! A [`Categorizer`] bundles the session's category vocabulary with the
//! configured classifier strategy, so the surrounding application can ask
//! for predictions without threading the vocabulary and strategy through
//! every call. The transaction store stays outside: it is owned by the
//! application and handed in as a read-only snapshot per call.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use memocat::categorizer::Categorizer;
//! use memocat::classifier::ClassifierConfig;
//! use memocat::transaction::TransactionStore;
//! use memocat::vocabulary::CategoryVocabulary;
//!
//! # fn main() -> memocat::error::Result<()> {
//! let categorizer = Categorizer::new(CategoryVocabulary::default(), ClassifierConfig::default())?;
//! let mut store = TransactionStore::new();
//!
//! // Labeled by the user.
//! store.push(categorizer.new_transaction(
//!     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
//!     4.50,
//!     "Starbucks Coffee",
//!     Some("Coffee".to_string()),
//!     store.as_slice(),
//! ));
//!
//! // No category supplied: the engine estimates one from the store.
//! let estimated = categorizer.new_transaction(
//!     NaiveDate::from_ymd_opt(2020, 1, 5).unwrap(),
//!     5.10,
//!     "Starbucks Latte",
//!     None,
//!     store.as_slice(),
//! );
//! assert_eq!(estimated.category(), Some("Coffee"));
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;

use crate::analysis::tokenize;
use crate::classifier::{Classifier, ClassifierConfig};
use crate::error::Result;
use crate::transaction::Transaction;
use crate::vocabulary::CategoryVocabulary;

/// The category inference engine: a vocabulary plus the active strategy.
pub struct Categorizer {
    vocabulary: CategoryVocabulary,
    classifier: Box<dyn Classifier>,
}

impl std::fmt::Debug for Categorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Categorizer")
            .field("vocabulary", &self.vocabulary)
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

impl Categorizer {
    /// Create a categorizer for the given vocabulary and configuration.
    pub fn new(vocabulary: CategoryVocabulary, config: ClassifierConfig) -> Result<Self> {
        Ok(Categorizer {
            vocabulary,
            classifier: config.build()?,
        })
    }

    /// The session's category vocabulary.
    pub fn vocabulary(&self) -> &CategoryVocabulary {
        &self.vocabulary
    }

    /// The name of the active strategy.
    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Predict the category for a memo text against a store snapshot.
    ///
    /// Returns `None` when no category clears the active strategy's
    /// confidence threshold; the caller decides how to surface that
    /// (typically by leaving the field blank for manual entry).
    pub fn predict(&self, memo: &str, store: &[Transaction]) -> Option<String> {
        self.classifier
            .predict(&tokenize(memo), store, &self.vocabulary)
    }

    /// Create a transaction, estimating its category when none is given.
    ///
    /// The estimate is computed against the current store, which does not
    /// yet contain the transaction being constructed. It is a
    /// point-in-time snapshot: later relabeling of other transactions
    /// does not revise it.
    pub fn new_transaction<S: Into<String>>(
        &self,
        date: NaiveDate,
        amount: f64,
        memo: S,
        category: Option<String>,
        store: &[Transaction],
    ) -> Transaction {
        let memo = memo.into();
        let category = category.or_else(|| self.predict(&memo, store));
        Transaction::new(date, amount, memo, category)
    }
}
