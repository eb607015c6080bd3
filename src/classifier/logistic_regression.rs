//! Logistic-regression classifier.
//!
//! The alternate strategy: per candidate category, fit a bias plus one
//! weight per training word by randomized coordinate hill-climbing on the
//! training log-likelihood, then score the candidate memo through the
//! logistic link. Training restarts from scratch on every prediction and
//! claims no convergence to a global optimum; a step that does not
//! improve the likelihood is always reverted, so the fit never regresses
//! below its starting point.

use ahash::AHashSet;
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classifier::classifier::Classifier;
use crate::classifier::types::CombinedProbability;
use crate::classifier::{labeled_transactions, overlaps_vocabulary, vocabulary_words};
use crate::error::{MemocatError, Result};
use crate::transaction::Transaction;
use crate::vocabulary::CategoryVocabulary;

/// Every model parameter starts at a small positive constant rather than
/// zero, so the initial likelihood surface is not perfectly flat.
const INITIAL_WEIGHT: f64 = 0.01;

/// Configuration for the logistic-regression classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LogisticRegressionConfig {
    /// Number of hill-climbing steps per category.
    pub iterations: usize,
    /// Minimum confidence a category must reach (inclusive) to be
    /// predicted.
    pub min_confidence: f64,
    /// Random seed for reproducible training; `None` seeds from the
    /// thread RNG.
    pub seed: Option<u64>,
}

impl Default for LogisticRegressionConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            min_confidence: 0.1,
            seed: None,
        }
    }
}

impl LogisticRegressionConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(MemocatError::configuration(
                "iterations must be positive".to_string(),
            ));
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

/// Gradient-free logistic-regression classifier.
pub struct LogisticRegressionClassifier {
    config: LogisticRegressionConfig,
}

impl std::fmt::Debug for LogisticRegressionClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogisticRegressionClassifier")
            .field("config", &self.config)
            .finish()
    }
}

impl LogisticRegressionClassifier {
    /// Create a new logistic-regression classifier.
    pub fn new(config: LogisticRegressionConfig) -> Result<Self> {
        config.validate()?;
        Ok(LogisticRegressionClassifier { config })
    }

    /// The configuration this classifier was built with.
    pub fn config(&self) -> &LogisticRegressionConfig {
        &self.config
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Classifier for LogisticRegressionClassifier {
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

        let mut rng = self.rng();
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

            // The model's feature space: every distinct word from this
            // category's labeled memos, sorted so weight indices are
            // stable between runs.
            let in_category: Vec<&Transaction> = labeled
                .iter()
                .copied()
                .filter(|t| t.category() == Some(category))
                .collect();
            let words = vocabulary_words(&in_category);

            let samples: Vec<TrainingSample> = labeled
                .iter()
                .map(|t| TrainingSample::from_transaction(t, category, &words))
                .collect();

            let model =
                CategoryModel::fit(words.len(), &samples, self.config.iterations, &mut rng);
            let probability = model.probability(&present_indices(memo_words, &words));
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
        "logistic-regression"
    }
}

/// One labeled transaction reduced to the model's feature space.
struct TrainingSample {
    /// Whether the transaction carries the category being fitted.
    in_category: bool,
    /// Indices into the training word list of the words present in the
    /// transaction's memo.
    present: Vec<usize>,
}

impl TrainingSample {
    fn from_transaction(transaction: &Transaction, category: &str, words: &[&str]) -> Self {
        TrainingSample {
            in_category: transaction.category() == Some(category),
            present: words
                .iter()
                .enumerate()
                .filter(|(_, word)| transaction.words().contains(**word))
                .map(|(index, _)| index)
                .collect(),
        }
    }
}

/// Indices into `words` of the candidate memo's words.
fn present_indices(memo_words: &AHashSet<String>, words: &[&str]) -> Vec<usize> {
    words
        .iter()
        .enumerate()
        .filter(|(_, word)| memo_words.contains(**word))
        .map(|(index, _)| index)
        .collect()
}

/// A fitted per-category linear model: a bias plus one weight per
/// training word. Weight indices are derived exactly from the training
/// word list, so a weight for an unknown word is unrepresentable.
struct CategoryModel {
    bias: f64,
    weights: Vec<f64>,
}

impl CategoryModel {
    fn new(word_count: usize) -> Self {
        CategoryModel {
            bias: INITIAL_WEIGHT,
            weights: vec![INITIAL_WEIGHT; word_count],
        }
    }

    /// Randomized coordinate hill-climbing: each step perturbs one
    /// uniformly chosen parameter by a standard-normal sample and keeps
    /// the perturbation only if the training log-likelihood strictly
    /// improves. Worse states are never accepted.
    fn fit(
        word_count: usize,
        samples: &[TrainingSample],
        iterations: usize,
        rng: &mut StdRng,
    ) -> Self {
        let mut model = CategoryModel::new(word_count);
        let mut best_log_likelihood = model.log_likelihood(samples);

        for _ in 0..iterations {
            // Parameter 0 is the bias; 1..=word_count map to weights.
            let parameter = rng.random_range(0..=word_count);
            let adjustment = standard_normal(rng);
            model.adjust(parameter, adjustment);

            let log_likelihood = model.log_likelihood(samples);
            if log_likelihood > best_log_likelihood {
                best_log_likelihood = log_likelihood;
            } else {
                model.adjust(parameter, -adjustment);
            }
        }

        model
    }

    fn adjust(&mut self, parameter: usize, delta: f64) {
        if parameter == 0 {
            self.bias += delta;
        } else {
            self.weights[parameter - 1] += delta;
        }
    }

    /// Total log-likelihood of the labeled transactions: `ln P` for the
    /// in-category transactions, `ln (1 - P)` for the rest.
    fn log_likelihood(&self, samples: &[TrainingSample]) -> f64 {
        samples
            .iter()
            .map(|sample| {
                let z = self.linear_term(&sample.present);
                // ln sigmoid(z) = -softplus(-z); ln (1 - sigmoid(z)) = -softplus(z)
                if sample.in_category {
                    -softplus(-z)
                } else {
                    -softplus(z)
                }
            })
            .sum()
    }

    /// Score a memo through the logistic link.
    fn probability(&self, present: &[usize]) -> f64 {
        let z = self.linear_term(present);
        1.0 / (1.0 + (-z).exp())
    }

    fn linear_term(&self, present: &[usize]) -> f64 {
        self.bias + present.iter().map(|&index| self.weights[index]).sum::<f64>()
    }
}

/// Numerically stable `ln(1 + e^x)`.
fn softplus(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}

/// Standard-normal sample via the Box-Muller transform.
fn standard_normal(rng: &mut StdRng) -> f64 {
    // 1 - u lies in (0, 1], keeping the logarithm finite.
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    (-2.0 * (1.0 - u1).ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenize;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn txn(date: &str, amount: f64, memo: &str, category: Option<&str>) -> Transaction {
        Transaction::new(
            date.parse::<NaiveDate>().unwrap(),
            amount,
            memo,
            category.map(String::from),
        )
    }

    fn seeded(seed: u64) -> LogisticRegressionClassifier {
        LogisticRegressionClassifier::new(LogisticRegressionConfig {
            seed: Some(seed),
            ..Default::default()
        })
        .unwrap()
    }

    fn training_store() -> Vec<Transaction> {
        vec![
            txn("2020-01-01", 4.50, "starbucks coffee", Some("Coffee")),
            txn("2020-01-02", 5.25, "starbucks coffee", Some("Coffee")),
            txn("2020-01-03", 4.80, "starbucks coffee", Some("Coffee")),
            txn("2020-01-04", 60.00, "shell gas", Some("Travel")),
            txn("2020-01-05", 55.00, "shell gas", Some("Travel")),
            txn("2020-01-06", 58.00, "shell gas", Some("Travel")),
        ]
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let config = LogisticRegressionConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(LogisticRegressionClassifier::new(config).is_err());
    }

    #[test]
    fn test_empty_store_predicts_none() {
        let vocabulary = CategoryVocabulary::default();
        let result = seeded(42).predict(&tokenize("Starbucks Latte"), &[], &vocabulary);
        assert_eq!(result, None);
    }

    #[test]
    fn test_no_shared_vocabulary_predicts_none() {
        let vocabulary = CategoryVocabulary::default();
        let store = vec![txn("2020-01-01", 4.5, "Starbucks Coffee", Some("Coffee"))];
        let result = seeded(42).predict(&tokenize("Whole Foods Market"), &store, &vocabulary);
        assert_eq!(result, None);
    }

    #[test]
    fn test_predicts_dominant_category() {
        let vocabulary = CategoryVocabulary::default();
        let store = training_store();
        let result = seeded(42).predict(&tokenize("starbucks coffee"), &store, &vocabulary);
        assert_eq!(result, Some("Coffee".to_string()));
    }

    #[test]
    fn test_seeded_training_is_reproducible() {
        let vocabulary = CategoryVocabulary::default();
        let store = training_store();

        let first = seeded(7).predict(&tokenize("shell gas"), &store, &vocabulary);
        let second = seeded(7).predict(&tokenize("shell gas"), &store, &vocabulary);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fit_never_regresses_below_initial_likelihood() {
        let samples = vec![
            TrainingSample {
                in_category: true,
                present: vec![0, 1],
            },
            TrainingSample {
                in_category: true,
                present: vec![0],
            },
            TrainingSample {
                in_category: false,
                present: vec![2],
            },
            TrainingSample {
                in_category: false,
                present: vec![],
            },
        ];

        let initial = CategoryModel::new(3).log_likelihood(&samples);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let fitted = CategoryModel::fit(3, &samples, 500, &mut rng);
            assert!(
                fitted.log_likelihood(&samples) >= initial,
                "seed {seed} regressed below the initial likelihood"
            );
        }
    }
}
