//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SpellfixError};

/// Default word pattern: runs of word characters.
pub const DEFAULT_WORD_PATTERN: &str = r"\w+";

/// A regex-based tokenizer that extracts every match of a pattern.
///
/// Text is lowercased before matching unless [`RegexTokenizer::preserve_case`]
/// is used, so the produced tokens are already in the normalized form the
/// frequency model and the suggester expect.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether text is lowercased before matching
    lowercase: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default `\w+` pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_WORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SpellfixError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            lowercase: true,
        })
    }

    /// Keep the original casing of the input text.
    pub fn preserve_case(mut self) -> Self {
        self.lowercase = false;
        self
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer lowercases its input.
    pub fn lowercases(&self) -> bool {
        self.lowercase
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        RegexTokenizer {
            pattern: Arc::new(Regex::new(DEFAULT_WORD_PATTERN).expect("valid default pattern")),
            lowercase: true,
        }
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_owned()
        };

        let tokens: Vec<Token> = self
            .pattern
            .find_iter(&text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
