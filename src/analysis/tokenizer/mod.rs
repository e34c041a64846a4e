//! Splitting corpus text into word tokens.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Turns raw text into a stream of normalized word tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Only the token texts, in order. Repeated words are kept so callers can
    /// count them.
    fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.tokenize(text)?.map(|token| token.text).collect())
    }
}

pub mod regex;

pub use self::regex::RegexTokenizer;
