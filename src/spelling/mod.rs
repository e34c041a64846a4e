//! Spelling correction and edit distance.
//!
//! Candidate corrections are generated by applying elementary edits
//! (deletion, transposition, substitution, insertion) to a word, filtered
//! against a corpus vocabulary and ranked by unigram probability. The weighted
//! minimum edit distance engine is independent of the suggester and can be
//! used on its own or to re-rank suggestions by edit cost.

pub mod cache;
pub mod cancellation;
pub mod closure;
pub mod corrector;
pub mod edits;
pub mod frequency;
pub mod levenshtein;
pub mod suggest;

// Re-export commonly used types
pub use cache::*;
pub use cancellation::*;
pub use closure::*;
pub use corrector::*;
pub use edits::*;
pub use frequency::*;
pub use levenshtein::*;
pub use suggest::*;
