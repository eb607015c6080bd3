//! Category classifier trait definition.

use ahash::AHashSet;

use crate::transaction::Transaction;
use crate::vocabulary::CategoryVocabulary;

/// Category classifier trait.
///
/// Implementations of this trait provide different statistical strategies
/// for inferring a transaction's category from its memo words. A
/// prediction is a pure, blocking computation over the store snapshot it
/// is handed; implementations never mutate the store and retrain from it
/// on every call, so a prediction always reflects the labels present at
/// call entry.
///
/// Prediction is total: every edge case (empty store, empty vocabulary,
/// no shared vocabulary, no category above the confidence threshold)
/// yields `None` rather than an error.
pub trait Classifier: Send + Sync {
    /// Predict the category for a candidate memo's normalized word set.
    ///
    /// # Arguments
    /// * `memo_words` - The candidate memo's token set
    /// * `store` - Snapshot of all transactions seen so far
    /// * `vocabulary` - The allowed category labels, in registration order
    ///
    /// # Returns
    /// The best-scoring category above the strategy's confidence
    /// threshold, or `None`.
    fn predict(
        &self,
        memo_words: &AHashSet<String>,
        store: &[Transaction],
        vocabulary: &CategoryVocabulary,
    ) -> Option<String>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &'static str;
}
