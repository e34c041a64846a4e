//! Error types for the spellfix library.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! the [`SpellfixError`] enum.
//!
//! # Examples
//!
//! ```
//! use spellfix::error::{Result, SpellfixError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellfixError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spellfix operations.
#[derive(Error, Debug)]
pub enum SpellfixError {
    /// I/O errors (reading corpora, frequency files, configuration)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenizer construction, invalid patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A per-operation edit cost was negative.
    #[error("Invalid cost: {0}")]
    InvalidCost(String),

    /// A word was looked up in the probability table but is not there.
    ///
    /// Suggestions are always intersected with the vocabulary first, so this
    /// points at a table that was built inconsistently.
    #[error("Unknown word: '{0}' has no entry in the probability table")]
    UnknownWord(String),

    /// Operation cancelled
    #[error("Operation cancelled: {0}")]
    OperationCancelled(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellfixError.
pub type Result<T> = std::result::Result<T, SpellfixError>;

impl SpellfixError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpellfixError::Analysis(msg.into())
    }

    /// Create a new invalid cost error.
    pub fn invalid_cost<S: Into<String>>(msg: S) -> Self {
        SpellfixError::InvalidCost(msg.into())
    }

    /// Create a new unknown word error.
    pub fn unknown_word<S: Into<String>>(word: S) -> Self {
        SpellfixError::UnknownWord(word.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        SpellfixError::OperationCancelled(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellfixError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellfixError::Other(msg.into())
    }
}
