//! Text analysis for corpus preparation.
//!
//! Corpora are turned into lowercase word tokens before they reach the
//! frequency model. The default pipeline is a single regex tokenizer matching
//! `\w+` over the lowercased text.

pub mod token;
pub mod tokenizer;
