//! Strategy selection for category classification.
//!
//! The selector is pure dispatch: a single configuration value names the
//! active strategy, and both strategies implement the same [`Classifier`]
//! contract, so they are interchangeable at the call site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classifier::classifier::Classifier;
use crate::classifier::logistic_regression::{
    LogisticRegressionClassifier, LogisticRegressionConfig,
};
use crate::classifier::word_probability::{WordProbabilityClassifier, WordProbabilityConfig};
use crate::error::{MemocatError, Result};

/// The available classifier strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierKind {
    /// Smoothed word-probability classifier (the default strategy).
    #[default]
    WordProbability,
    /// Gradient-free logistic-regression classifier.
    LogisticRegression,
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierKind::WordProbability => write!(f, "word-probability"),
            ClassifierKind::LogisticRegression => write!(f, "logistic-regression"),
        }
    }
}

impl FromStr for ClassifierKind {
    type Err = MemocatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "word-probability" => Ok(ClassifierKind::WordProbability),
            "logistic-regression" => Ok(ClassifierKind::LogisticRegression),
            other => Err(MemocatError::configuration(format!(
                "unknown classifier strategy: {other}"
            ))),
        }
    }
}

/// Configuration for the classification engine: the active strategy plus
/// the per-strategy parameters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// The active strategy.
    pub kind: ClassifierKind,
    /// Parameters for the word-probability strategy.
    pub word_probability: WordProbabilityConfig,
    /// Parameters for the logistic-regression strategy.
    pub logistic_regression: LogisticRegressionConfig,
}

impl ClassifierConfig {
    /// Build the configured strategy.
    pub fn build(&self) -> Result<Box<dyn Classifier>> {
        match self.kind {
            ClassifierKind::WordProbability => new_word_probability(self.word_probability),
            ClassifierKind::LogisticRegression => new_logistic_regression(self.logistic_regression),
        }
    }
}

/// Create a new word-probability classifier.
pub fn new_word_probability(config: WordProbabilityConfig) -> Result<Box<dyn Classifier>> {
    Ok(Box::new(WordProbabilityClassifier::new(config)?))
}

/// Create a new logistic-regression classifier.
pub fn new_logistic_regression(config: LogisticRegressionConfig) -> Result<Box<dyn Classifier>> {
    Ok(Box::new(LogisticRegressionClassifier::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_display() {
        for kind in [
            ClassifierKind::WordProbability,
            ClassifierKind::LogisticRegression,
        ] {
            let parsed: ClassifierKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!("nearest-neighbor".parse::<ClassifierKind>().is_err());
    }

    #[test]
    fn test_build_dispatches_on_kind() {
        let config = ClassifierConfig::default();
        assert_eq!(config.build().unwrap().name(), "word-probability");

        let config = ClassifierConfig {
            kind: ClassifierKind::LogisticRegression,
            ..Default::default()
        };
        assert_eq!(config.build().unwrap().name(), "logistic-regression");
    }

    #[test]
    fn test_build_propagates_invalid_configuration() {
        let config = ClassifierConfig {
            word_probability: WordProbabilityConfig {
                smoothing: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.build().is_err());
    }
}
