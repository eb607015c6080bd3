//! Common types for category classification.
//!
//! Both types here are ephemeral derived data: they are recomputed in
//! full on every prediction call and never cached across calls, because
//! the store may have changed in between.

/// Smoothed presence probabilities for one `(word, category)` pair.
///
/// Both fields are additive-smoothed Bernoulli estimates, strictly inside
/// the open interval `(0, 1)`, which keeps the log-probabilities summed
/// from them finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordProbability {
    /// Smoothed P(word present | transaction is in the category).
    pub prob_belongs_to_category: f64,
    /// Smoothed P(word present | transaction is not in the category).
    pub not_prob_belongs_to_category: f64,
}

/// The posterior-like score computed for one candidate category.
///
/// Scores are independent binary posteriors, not a distribution across
/// categories; they are consumed only to rank categories for a single
/// prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedProbability {
    /// The candidate category label.
    pub category: String,
    /// The category's confidence score in `[0, 1]`.
    pub probability: f64,
}
