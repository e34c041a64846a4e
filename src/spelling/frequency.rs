//! Word frequencies and probabilities derived from a corpus.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::{debug, warn};

use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::{Result, SpellfixError};

/// Word → occurrence count.
pub type FrequencyTable = AHashMap<String, u64>;

/// Word → `count / total`.
pub type ProbabilityTable = AHashMap<String, f64>;

/// The set of known words.
pub type Vocabulary = AHashSet<String>;

/// Unigram model of a corpus: counts, probabilities and vocabulary.
///
/// The three tables are built together and never updated in place; merging or
/// re-counting produces a new model.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    counts: FrequencyTable,
    probabilities: ProbabilityTable,
    vocabulary: Vocabulary,
    total_count: u64,
}

impl FrequencyModel {
    /// Build from `(word, count)` pairs. Repeated words are summed and zero
    /// counts are dropped.
    ///
    /// Fails with [`SpellfixError::InvalidArgument`] if a word's count or the
    /// corpus total does not fit in a `u64`.
    pub fn from_counts<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut counts = FrequencyTable::new();
        for (word, count) in pairs {
            if count == 0 {
                continue;
            }
            let word: String = word.into();
            let current = counts.get(&word).copied().unwrap_or(0);
            let summed = current.checked_add(count).ok_or_else(|| {
                SpellfixError::invalid_argument(format!("count overflow for word '{word}'"))
            })?;
            counts.insert(word, summed);
        }
        Self::from_table(counts)
    }

    /// Count already-normalized words.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_counts(words.into_iter().map(|word| (word, 1)))
    }

    /// Tokenize `text` with the default lowercasing `\w+` tokenizer and count.
    pub fn from_corpus(text: &str) -> Result<Self> {
        Self::from_corpus_with(text, &RegexTokenizer::default())
    }

    /// Tokenize `text` with a custom tokenizer and count.
    pub fn from_corpus_with<T: Tokenizer + ?Sized>(text: &str, tokenizer: &T) -> Result<Self> {
        let words = tokenizer.words(text)?;
        debug!("{} tokenizer produced {} tokens", tokenizer.name(), words.len());
        Self::from_words(words)
    }

    /// Read a plain-text corpus file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let model = Self::from_corpus(&text)?;
        debug!(
            "Loaded corpus {}: {} distinct words, {} tokens",
            path.display(),
            model.word_count(),
            model.total_count()
        );
        Ok(model)
    }

    /// Load a frequency file with one `word count` pair per line.
    ///
    /// Blank lines and lines starting with `#` are ignored; malformed lines
    /// are skipped with a warning.
    pub fn load_from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut pairs = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.as_slice() {
                [word, count] => match count.parse::<u64>() {
                    Ok(count) => pairs.push((word.to_lowercase(), count)),
                    Err(e) => warn!("Skipping line {}: invalid count '{count}': {e}", line_num + 1),
                },
                _ => warn!("Skipping line {}: expected 'word count'", line_num + 1),
            }
        }

        Self::from_counts(pairs)
    }

    /// Write `word count` lines, most frequent first.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for (word, count) in self.most_frequent_words(self.word_count()) {
            writeln!(writer, "{word} {count}")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn from_table(counts: FrequencyTable) -> Result<Self> {
        let total_count = counts
            .values()
            .try_fold(0u64, |total, &count| total.checked_add(count))
            .ok_or_else(|| SpellfixError::invalid_argument("total word count overflows u64"))?;
        let probabilities: ProbabilityTable = counts
            .iter()
            .map(|(word, &count)| (word.clone(), count as f64 / total_count as f64))
            .collect();
        let vocabulary: Vocabulary = counts.keys().cloned().collect();

        Ok(FrequencyModel {
            counts,
            probabilities,
            vocabulary,
            total_count,
        })
    }

    /// Combine two models into a new one, summing counts.
    pub fn merge(&self, other: &FrequencyModel) -> Result<Self> {
        Self::from_counts(
            self.counts
                .iter()
                .chain(other.counts.iter())
                .map(|(word, &count)| (word.clone(), count)),
        )
    }

    /// Check if a word is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Occurrence count, zero for unknown words.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Probability of a known word.
    ///
    /// Unknown words are an error rather than zero.
    pub fn probability(&self, word: &str) -> Result<f64> {
        self.probabilities
            .get(word)
            .copied()
            .ok_or_else(|| SpellfixError::unknown_word(word))
    }

    pub fn counts(&self) -> &FrequencyTable {
        &self.counts
    }

    pub fn probabilities(&self) -> &ProbabilityTable {
        &self.probabilities
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// The `limit` most frequent words; ties are ordered alphabetically.
    pub fn most_frequent_words(&self, limit: usize) -> Vec<(String, u64)> {
        let mut word_freq: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.clone(), count))
            .collect();

        word_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        word_freq.truncate(limit);
        word_freq
    }
}
