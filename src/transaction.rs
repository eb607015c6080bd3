//! Transaction records and the in-memory transaction store.
//!
//! A [`Transaction`] couples the immutable facts of a bank transaction
//! (date, amount, memo) with a mutable category label and the normalized
//! word set derived from the memo. The [`TransactionStore`] is the
//! insertion-ordered collection the surrounding application owns; the
//! classifiers read it as a `&[Transaction]` snapshot and learn from the
//! transactions whose category is present.

use ahash::AHashSet;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::analysis::tokenize;

/// A single bank transaction.
///
/// The core fields (`date`, `amount`, `memo`) are immutable after
/// construction. `category` may be rewritten at any time, either by the
/// user or by an accepted prediction. `words` is derived from the memo
/// exactly once; because the memo cannot change, the derived set can
/// never go stale.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use memocat::transaction::Transaction;
///
/// let txn = Transaction::new(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     4.50,
///     "Starbucks Coffee",
///     Some("Coffee".to_string()),
/// );
///
/// assert_eq!(txn.memo(), "Starbucks Coffee");
/// assert_eq!(txn.category(), Some("Coffee"));
/// assert!(txn.words().contains("starbucks"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Calendar date of the transaction.
    date: NaiveDate,

    /// Transaction amount in the account currency.
    amount: f64,

    /// Raw memo text as it appeared on the statement.
    memo: String,

    /// Category label, absent until supplied or predicted.
    category: Option<String>,

    /// Normalized token set derived from `memo` at construction.
    #[serde(skip)]
    words: AHashSet<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Pass `None` as the category for an unlabeled transaction; the
    /// eager-estimate lifecycle lives on
    /// [`Categorizer::new_transaction`](crate::categorizer::Categorizer::new_transaction).
    pub fn new<S: Into<String>>(
        date: NaiveDate,
        amount: f64,
        memo: S,
        category: Option<String>,
    ) -> Self {
        let memo = memo.into();
        let words = tokenize(&memo);
        Transaction {
            date,
            amount,
            memo,
            category,
            words,
        }
    }

    /// Calendar date of the transaction.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Transaction amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Raw memo text.
    pub fn memo(&self) -> &str {
        &self.memo
    }

    /// Current category label, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Overwrite the category label.
    ///
    /// Edits are point-in-time: they are not propagated to estimates
    /// previously stored on other transactions.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    /// The normalized token set derived from the memo.
    pub fn words(&self) -> &AHashSet<String> {
        &self.words
    }
}

/// Serialized form of a transaction; `words` is rebuilt from the memo on
/// deserialization so the derived set cannot diverge from its source.
#[derive(Deserialize)]
struct TransactionRecord {
    date: NaiveDate,
    amount: f64,
    memo: String,
    #[serde(default)]
    category: Option<String>,
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = TransactionRecord::deserialize(deserializer)?;
        Ok(Transaction::new(
            record.date,
            record.amount,
            record.memo,
            record.category,
        ))
    }
}

/// The insertion-ordered collection of transactions.
///
/// The store is owned by the surrounding application; any component may
/// append transactions or rewrite a transaction's category, while the
/// classifiers only ever read a snapshot via [`TransactionStore::as_slice`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        TransactionStore::default()
    }

    /// Append a transaction, preserving insertion order.
    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get a transaction by insertion index.
    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    /// Get a mutable transaction by insertion index, e.g. to overwrite
    /// its category after a user edit.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Transaction> {
        self.transactions.get_mut(index)
    }

    /// Iterate over the transactions in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// The store contents as a read-only snapshot slice.
    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl From<Vec<Transaction>> for TransactionStore {
    fn from(transactions: Vec<Transaction>) -> Self {
        TransactionStore { transactions }
    }
}

impl FromIterator<Transaction> for TransactionStore {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        TransactionStore {
            transactions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TransactionStore {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
