//! The fixed, ordered set of category labels.
//!
//! The vocabulary is configured once per session and never mutated by the
//! classifiers. Insertion order matters: it defines the display order and
//! the tie-break between categories that score identically.

use serde::{Deserialize, Serialize};

/// An ordered, duplicate-free set of category labels.
///
/// # Examples
///
/// ```
/// use memocat::vocabulary::CategoryVocabulary;
///
/// let vocabulary = CategoryVocabulary::new(["Coffee", "Travel"]);
/// assert_eq!(vocabulary.len(), 2);
/// assert!(vocabulary.contains("Coffee"));
/// assert_eq!(vocabulary.iter().next(), Some("Coffee"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryVocabulary {
    labels: Vec<String>,
}

impl CategoryVocabulary {
    /// Create a vocabulary from the given labels, preserving first-seen
    /// order and dropping duplicates.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if !deduped.contains(&label) {
                deduped.push(label);
            }
        }
        CategoryVocabulary { labels: deduped }
    }

    /// Whether the given label belongs to the vocabulary.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Iterate over the labels in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The labels as a slice, in registration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Default for CategoryVocabulary {
    /// The stock set of personal-spending categories.
    fn default() -> Self {
        CategoryVocabulary::new([
            "Grocery",
            "Utility",
            "Electronics",
            "Entertainment",
            "Coffee",
            "Restaurants",
            "Travel",
        ])
    }
}

impl<S: Into<String>> FromIterator<S> for CategoryVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        CategoryVocabulary::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_is_preserved() {
        let vocabulary = CategoryVocabulary::new(["Coffee", "Travel", "Grocery"]);
        let labels: Vec<&str> = vocabulary.iter().collect();
        assert_eq!(labels, vec!["Coffee", "Travel", "Grocery"]);
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        let vocabulary = CategoryVocabulary::new(["Coffee", "Travel", "Coffee"]);
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.iter().next(), Some("Coffee"));
    }

    #[test]
    fn test_default_vocabulary() {
        let vocabulary = CategoryVocabulary::default();
        assert_eq!(vocabulary.len(), 7);
        assert!(vocabulary.contains("Coffee"));
        assert!(vocabulary.contains("Travel"));
    }
}
