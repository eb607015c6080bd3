//! Integration tests for the categorization engine.

use chrono::NaiveDate;
use memocat::classifier::LogisticRegressionConfig;
use memocat::prelude::*;

fn date(d: &str) -> NaiveDate {
    d.parse().unwrap()
}

/// A small statement the user has partially labeled.
fn fixture_store() -> TransactionStore {
    serde_json::from_str(
        r#"[
            {"date": "2020-01-01", "amount": 4.50, "memo": "Starbucks Coffee #1912", "category": "Coffee"},
            {"date": "2020-01-02", "amount": 60.00, "memo": "Shell Gas Station", "category": "Travel"},
            {"date": "2020-01-03", "amount": 5.25, "memo": "Starbucks Downtown", "category": "Coffee"},
            {"date": "2020-01-04", "amount": 58.10, "memo": "Shell Fuel TX", "category": "Travel"},
            {"date": "2020-01-05", "amount": 12.00, "memo": "Unlabeled grocery run"}
        ]"#,
    )
    .unwrap()
}

#[test]
fn test_deserialized_transactions_have_derived_words() {
    let store = fixture_store();
    let first = store.get(0).unwrap();

    assert_eq!(first.category(), Some("Coffee"));
    assert!(first.words().contains("starbucks"));
    assert!(first.words().contains("coffee"));
    // "#1912" carries no letters and disappears entirely.
    assert_eq!(first.words().len(), 2);

    let unlabeled = store.get(4).unwrap();
    assert_eq!(unlabeled.category(), None);
}

#[test]
fn test_serialization_omits_the_derived_word_set() {
    let store = fixture_store();
    let json = serde_json::to_value(store.get(0).unwrap()).unwrap();
    assert!(json.get("words").is_none());
    assert_eq!(json.get("memo").unwrap(), "Starbucks Coffee #1912");
}

#[test]
fn test_word_probability_predicts_from_fixture() {
    let categorizer =
        Categorizer::new(CategoryVocabulary::default(), ClassifierConfig::default()).unwrap();
    let store = fixture_store();

    assert_eq!(
        categorizer.predict("Starbucks Latte", store.as_slice()),
        Some("Coffee".to_string())
    );
    assert_eq!(
        categorizer.predict("Shell Gas", store.as_slice()),
        Some("Travel".to_string())
    );
    // No overlap with anything seen so far.
    assert_eq!(categorizer.predict("Whole Foods Market", store.as_slice()), None);
}

#[test]
fn test_logistic_regression_predicts_from_fixture() {
    let config = ClassifierConfig {
        kind: ClassifierKind::LogisticRegression,
        logistic_regression: LogisticRegressionConfig {
            seed: Some(42),
            ..Default::default()
        },
        ..Default::default()
    };
    let categorizer = Categorizer::new(CategoryVocabulary::default(), config).unwrap();
    let store = fixture_store();

    // The same edge cases fold into None under either strategy.
    assert_eq!(categorizer.predict("Whole Foods Market", store.as_slice()), None);
    assert_eq!(categorizer.predict("Starbucks Latte", &[]), None);

    // Any prediction comes from the vocabulary.
    if let Some(category) = categorizer.predict("Starbucks Latte", store.as_slice()) {
        assert!(categorizer.vocabulary().contains(&category));
    }
}

#[test]
fn test_both_strategies_return_none_for_empty_store() {
    for kind in [ClassifierKind::WordProbability, ClassifierKind::LogisticRegression] {
        let config = ClassifierConfig {
            kind,
            ..Default::default()
        };
        let categorizer = Categorizer::new(CategoryVocabulary::default(), config).unwrap();
        assert_eq!(
            categorizer.predict("Starbucks Latte", &[]),
            None,
            "{kind} should have no prediction for an empty store"
        );
    }
}

#[test]
fn test_growing_store_workflow() {
    let categorizer =
        Categorizer::new(CategoryVocabulary::default(), ClassifierConfig::default()).unwrap();
    let mut store = TransactionStore::new();

    // Nothing to learn from yet.
    let first = categorizer.new_transaction(
        date("2020-01-01"),
        4.50,
        "Starbucks Coffee",
        None,
        store.as_slice(),
    );
    assert_eq!(first.category(), None);
    store.push(first);

    // The user labels the first transaction by hand.
    store
        .get_mut(0)
        .unwrap()
        .set_category(Some("Coffee".to_string()));

    // The next matching memo is estimated eagerly at construction.
    let second = categorizer.new_transaction(
        date("2020-01-08"),
        5.10,
        "Starbucks Latte Coffee",
        None,
        store.as_slice(),
    );
    assert_eq!(second.category(), Some("Coffee"));
    store.push(second);

    assert_eq!(store.len(), 2);
}

#[test]
fn test_strategy_kind_parses_from_configuration_text() {
    let kind: ClassifierKind = "logistic-regression".parse().unwrap();
    assert_eq!(kind, ClassifierKind::LogisticRegression);
    assert!("decision-tree".parse::<ClassifierKind>().is_err());
}
