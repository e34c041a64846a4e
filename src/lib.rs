//! # spellfix
//!
//! Frequency-ranked spelling correction and weighted minimum edit distance.
//!
//! ## Features
//!
//! - Candidate generation by deletion, transposition, substitution and insertion
//! - Edit-distance-one and edit-distance-two candidate sets, optionally in parallel
//! - Vocabulary-filtered suggestions ranked by unigram probability
//! - Minimum edit distance with configurable insert/delete/replace costs,
//!   full matrix inspection and alignment
//!
//! ```
//! use spellfix::spelling::{FrequencyModel, suggest_corrections};
//!
//! let model = FrequencyModel::from_corpus("days dye days day").unwrap();
//! let suggestions =
//!     suggest_corrections("dys", model.probabilities(), model.vocabulary(), 2).unwrap();
//! assert_eq!(suggestions[0].0, "days");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
