//! Word-probability classifier.
//!
//! For every candidate category this classifier derives Laplace-smoothed
//! Bernoulli estimates of word presence from the labeled transactions,
//! scores the candidate memo's full presence/absence pattern under
//! "belongs to the category" and "does not belong to the category", and
//! normalizes the two into a posterior-like confidence. Categories are
//! scored independently; the scores are not a distribution across
//! categories.

use ahash::{AHashMap, AHashSet};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifier::classifier::Classifier;
use crate::classifier::types::{CombinedProbability, WordProbability};
use crate::classifier::{labeled_transactions, overlaps_vocabulary, vocabulary_words};
use crate::error::{MemocatError, Result};
use crate::transaction::Transaction;
use crate::vocabulary::CategoryVocabulary;

/// Configuration for the word-probability classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WordProbabilityConfig {
    /// Additive smoothing constant; must be positive so no presence
    /// estimate is ever exactly 0 or 1.
    pub smoothing: f64,
    /// Minimum confidence a category must reach (inclusive) to be
    /// predicted.
    pub min_confidence: f64,
}

impl Default for WordProbabilityConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            min_confidence: 0.1,
        }
    }
}

impl WordProbabilityConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.smoothing > 0.0) {
            return Err(MemocatError::configuration(format!(
                "smoothing must be positive, got {}",
                self.smoothing
            )));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(MemocatError::configuration(format!(
                "min_confidence must be in [0, 1], got {}",
                self.min_confidence
            )));
        }
        Ok(())
    }
}

/// Smoothed word-probability classifier.
///
/// Deterministic: repeated predictions against an unchanged store always
/// return the same category.
#[derive(Debug, Clone)]
pub struct WordProbabilityClassifier {
    config: WordProbabilityConfig,
}

impl WordProbabilityClassifier {
    /// Create a new word-probability classifier.
    pub fn new(config: WordProbabilityConfig) -> Result<Self> {
        config.validate()?;
        Ok(WordProbabilityClassifier { config })
    }

    /// The configuration this classifier was built with.
    pub fn config(&self) -> &WordProbabilityConfig {
        &self.config
    }
}

impl Classifier for WordProbabilityClassifier {
    fn predict(
        &self,
        memo_words: &AHashSet<String>,
        store: &[Transaction],
        vocabulary: &CategoryVocabulary,
    ) -> Option<String> {
        let labeled = labeled_transactions(store);
        if labeled.is_empty() {
            return None;
        }

        let vocab_words = vocabulary_words(&labeled);
        if !overlaps_vocabulary(memo_words, &vocab_words) {
            return None;
        }

        let k = self.config.smoothing;
        let mut scored: Vec<CombinedProbability> = Vec::new();

        for category in vocabulary.iter() {
            let in_count = labeled
                .iter()
                .filter(|t| t.category() == Some(category))
                .count();
            // A category with no labeled support is never a candidate.
            if in_count == 0 {
                continue;
            }
            let out_count = labeled.len() - in_count;

            // How many transactions on each side of the category contain
            // each vocabulary word.
            let mut present_in: AHashMap<&str, usize> = AHashMap::new();
            let mut present_out: AHashMap<&str, usize> = AHashMap::new();
            for transaction in &labeled {
                let counts = if transaction.category() == Some(category) {
                    &mut present_in
                } else {
                    &mut present_out
                };
                for word in transaction.words() {
                    *counts.entry(word.as_str()).or_insert(0) += 1;
                }
            }

            // Log-likelihood of the candidate's full presence/absence
            // pattern under both halves of the binary partition.
            let mut log_if_category = 0.0;
            let mut log_if_not_category = 0.0;
            for &word in &vocab_words {
                let probability = WordProbability {
                    prob_belongs_to_category: (k
                        + present_in.get(word).copied().unwrap_or(0) as f64)
                        / (2.0 * k + in_count as f64),
                    not_prob_belongs_to_category: (k
                        + present_out.get(word).copied().unwrap_or(0) as f64)
                        / (2.0 * k + out_count as f64),
                };
                if memo_words.contains(word) {
                    log_if_category += probability.prob_belongs_to_category.ln();
                    log_if_not_category += probability.not_prob_belongs_to_category.ln();
                } else {
                    log_if_category += (1.0 - probability.prob_belongs_to_category).ln();
                    log_if_not_category += (1.0 - probability.not_prob_belongs_to_category).ln();
                }
            }

            // p_if / (p_if + p_not) evaluated without leaving log space;
            // both exponentials can underflow to zero in f64.
            let probability = 1.0 / (1.0 + (log_if_not_category - log_if_category).exp());
            debug!("category {category:?} scored {probability:.6}");
            scored.push(CombinedProbability {
                category: category.to_string(),
                probability,
            });
        }

        scored.retain(|c| c.probability >= self.config.min_confidence);
        // Stable sort: categories pushed in registration order, so the
        // first-registered category wins ties.
        scored.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        scored.into_iter().next().map(|c| c.category)
    }

    fn name(&self) -> &'static str {
        "word-probability"
    }
}
