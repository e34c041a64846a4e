//! Spelling corrector that owns a frequency model and applies the suggester
//! to single words, batches and running text.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;
use crate::spelling::cache::DistanceCache;
use crate::spelling::cancellation::CancellationToken;
use crate::spelling::frequency::FrequencyModel;
use crate::spelling::suggest::{CandidateSource, CorrectionSuggester, Suggestion, SuggestionConfig};

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Suggestion generation settings.
    pub suggestion: SuggestionConfig,
    /// Tokens shorter than this (in characters) are never corrected.
    pub min_word_length: usize,
    /// Leave tokens made only of digits alone.
    pub skip_numeric: bool,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            suggestion: SuggestionConfig::default(),
            min_word_length: 1,
            skip_numeric: true,
        }
    }
}

impl CorrectorConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Suggestions for one unknown token of a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCorrection {
    /// The normalized token.
    pub word: String,
    pub position: usize,
    pub start_offset: usize,
    pub end_offset: usize,
    pub source: CandidateSource,
    pub suggestions: Vec<Suggestion>,
}

impl WordCorrection {
    /// The most probable suggestion, if any.
    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

/// Statistics about the spelling corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorStats {
    /// Number of distinct words in the vocabulary.
    pub vocabulary_size: usize,
    /// Total number of corpus tokens counted.
    pub total_tokens: u64,
}

/// Main spelling corrector.
///
/// Clones share one distance cache.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    model: FrequencyModel,
    config: CorrectorConfig,
    tokenizer: RegexTokenizer,
    distance_cache: Arc<DistanceCache>,
}

impl SpellingCorrector {
    /// Create a corrector with the default configuration.
    pub fn new(model: FrequencyModel) -> Self {
        Self::with_config(model, CorrectorConfig::default())
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(model: FrequencyModel, config: CorrectorConfig) -> Self {
        SpellingCorrector {
            model,
            config,
            tokenizer: RegexTokenizer::default(),
            distance_cache: Arc::new(DistanceCache::new()),
        }
    }

    /// Build the model from a plain-text corpus.
    pub fn from_corpus(text: &str) -> Result<Self> {
        Ok(Self::new(FrequencyModel::from_corpus(text)?))
    }

    /// Build the model from a corpus file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(FrequencyModel::from_file(path)?))
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Distances memoized by cost-aware ranking.
    pub fn distance_cache(&self) -> &DistanceCache {
        &self.distance_cache
    }

    /// Update the corrector configuration.
    pub fn set_config(&mut self, config: CorrectorConfig) {
        self.config = config;
    }

    fn suggester(&self) -> CorrectionSuggester<'_> {
        CorrectionSuggester::with_config(
            self.model.probabilities(),
            self.model.vocabulary(),
            self.config.suggestion.clone(),
        )
        .with_distance_cache(&self.distance_cache)
    }

    /// Check if a word is known, after lowercasing.
    pub fn is_correct(&self, word: &str) -> bool {
        self.model.contains(&word.to_lowercase())
    }

    /// Get suggestions for a single word.
    pub fn suggest(&self, word: &str) -> Result<Vec<Suggestion>> {
        self.suggester().suggest(&word.to_lowercase())
    }

    /// Get suggestions, stopping early once `token` is cancelled.
    pub fn suggest_cancellable(
        &self,
        word: &str,
        token: &CancellationToken,
    ) -> Result<Vec<Suggestion>> {
        self.suggester().suggest_cancellable(&word.to_lowercase(), token)
    }

    /// The best correction for `word`, or the lowercased word itself when
    /// nothing is suggested.
    pub fn correct(&self, word: &str) -> Result<String> {
        let word = word.to_lowercase();
        let best = self
            .suggester()
            .suggest(&word)?
            .into_iter()
            .next()
            .map(|suggestion| suggestion.word);
        Ok(best.unwrap_or(word))
    }

    /// Suggestions for many words, computed in parallel. Output order follows
    /// input order.
    pub fn suggest_many<S: AsRef<str> + Sync>(
        &self,
        words: &[S],
    ) -> Result<Vec<Vec<Suggestion>>> {
        let suggester = self.suggester();
        words
            .par_iter()
            .map(|word| suggester.suggest(&word.as_ref().to_lowercase()))
            .collect()
    }

    /// Suggestions for every unknown token of `text`.
    pub fn correct_text(&self, text: &str) -> Result<Vec<WordCorrection>> {
        let suggester = self.suggester();
        let no_cancel = CancellationToken::new();
        let mut corrections = Vec::new();

        for token in self.tokenizer.tokenize(text)? {
            if self.should_skip(&token) {
                continue;
            }

            let (source, suggestions) = suggester.lookup(&token.text, &no_cancel)?;
            corrections.push(WordCorrection {
                word: token.text,
                position: token.position,
                start_offset: token.start_offset,
                end_offset: token.end_offset,
                source,
                suggestions,
            });
        }

        debug!(
            "{} unknown tokens in text (pattern {})",
            corrections.len(),
            self.tokenizer.pattern()
        );
        Ok(corrections)
    }

    fn should_skip(&self, token: &Token) -> bool {
        self.model.contains(&token.text)
            || token.char_len() < self.config.min_word_length
            || (self.config.skip_numeric && token.text.chars().all(|c| c.is_ascii_digit()))
    }

    /// Get statistics about the corrector.
    pub fn stats(&self) -> CorrectorStats {
        CorrectorStats {
            vocabulary_size: self.model.word_count(),
            total_tokens: self.model.total_count(),
        }
    }
}
