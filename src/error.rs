//! Error types for the memocat library.
//!
//! Prediction itself is total: every edge case (empty store, empty
//! vocabulary, memo with no recognized tokens, no category meeting the
//! confidence threshold) folds into a `None` result rather than an error.
//! The only fallible surface is configuration, so the [`MemocatError`]
//! enum stays small.

use thiserror::Error;

/// The main error type for memocat operations.
#[derive(Error, Debug)]
pub enum MemocatError {
    /// Configuration errors (invalid smoothing constant, thresholds, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with MemocatError.
pub type Result<T> = std::result::Result<T, MemocatError>;

impl MemocatError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        MemocatError::Configuration(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MemocatError::Other(msg.into())
    }
}
