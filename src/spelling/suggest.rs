//! Vocabulary-filtered, probability-ranked correction suggestions.
//!
//! Candidates are looked up in priority order and the first stage that
//! produces anything wins:
//!
//! 1. the word itself, if it is in the vocabulary;
//! 2. known words at edit distance one;
//! 3. known words at edit distance two;
//! 4. nothing.
//!
//! Survivors are paired with their probability and, under the default
//! [`RankingPolicy::Ranked`], sorted most-probable first and cut to the
//! requested count.

use std::cmp::Ordering;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellfixError};
use crate::spelling::cache::DistanceCache;
use crate::spelling::cancellation::CancellationToken;
use crate::spelling::closure::{
    edit_distance_one, edit_distance_two_cancellable, par_edit_distance_two,
};
use crate::spelling::edits::CandidateSet;
use crate::spelling::frequency::{ProbabilityTable, Vocabulary};
use crate::spelling::levenshtein::{EditCosts, MinEditDistance};

/// What to do when the query is already a known word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExactMatchPolicy {
    /// Suggest only the word itself.
    #[default]
    ShortCircuit,
    /// Suggest the word together with its known distance-one neighbors.
    IncludeNeighbors,
}

/// How the surviving candidates are ordered and limited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// Most probable first, truncated to `max_suggestions`.
    #[default]
    Ranked,
    /// Every survivor in alphabetical order; `max_suggestions` is ignored.
    Unranked,
}

/// Which stage of the lookup produced the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    Exact,
    EditDistanceOne,
    EditDistanceTwo,
    NotFound,
}

/// Configuration for suggestion generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions under [`RankingPolicy::Ranked`].
    pub max_suggestions: usize,
    /// Whether adjacent transpositions count as a single edit.
    pub allow_switch: bool,
    pub ranking: RankingPolicy,
    pub exact_match: ExactMatchPolicy,
    /// When set, ranked suggestions are ordered by weighted edit distance
    /// first and probability second.
    pub distance_costs: Option<EditCosts>,
    /// Expand distance-two candidates on the rayon pool.
    pub parallel: bool,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_suggestions: 5,
            allow_switch: true,
            ranking: RankingPolicy::Ranked,
            exact_match: ExactMatchPolicy::ShortCircuit,
            distance_costs: None,
            parallel: false,
        }
    }
}

/// A suggested word and its unigram probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub probability: f64,
    /// Weighted edit distance from the query, when cost-aware ranking is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,
}

impl Suggestion {
    pub fn new(word: String, probability: f64) -> Self {
        Suggestion {
            word,
            probability,
            distance: None,
        }
    }

    pub fn into_pair(self) -> (String, f64) {
        (self.word, self.probability)
    }
}

/// Suggests corrections against borrowed probability and vocabulary tables.
///
/// The tables are read-only, so one suggester (or many) can serve concurrent
/// queries.
#[derive(Debug, Clone)]
pub struct CorrectionSuggester<'a> {
    probabilities: &'a ProbabilityTable,
    vocabulary: &'a Vocabulary,
    config: SuggestionConfig,
    distance_cache: Option<&'a DistanceCache>,
}

impl<'a> CorrectionSuggester<'a> {
    pub fn new(probabilities: &'a ProbabilityTable, vocabulary: &'a Vocabulary) -> Self {
        Self::with_config(probabilities, vocabulary, SuggestionConfig::default())
    }

    pub fn with_config(
        probabilities: &'a ProbabilityTable,
        vocabulary: &'a Vocabulary,
        config: SuggestionConfig,
    ) -> Self {
        CorrectionSuggester {
            probabilities,
            vocabulary,
            config,
            distance_cache: None,
        }
    }

    /// Memoize cost-aware re-ranking distances in `cache`.
    pub fn with_distance_cache(mut self, cache: &'a DistanceCache) -> Self {
        self.distance_cache = Some(cache);
        self
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Known candidates for `word` and the stage they came from.
    pub fn candidates(&self, word: &str) -> Result<(CandidateSource, CandidateSet)> {
        self.candidates_cancellable(word, &CancellationToken::new())
    }

    /// Like [`Self::candidates`], polling `token` between stages.
    pub fn candidates_cancellable(
        &self,
        word: &str,
        token: &CancellationToken,
    ) -> Result<(CandidateSource, CandidateSet)> {
        let allow_switch = self.config.allow_switch;

        let (source, candidates) = if self.vocabulary.contains(word) {
            let mut exact = CandidateSet::new();
            exact.insert(word.to_string());
            if self.config.exact_match == ExactMatchPolicy::IncludeNeighbors {
                token.check("edit distance one")?;
                exact.extend(self.known(edit_distance_one(word, allow_switch)));
            }
            (CandidateSource::Exact, exact)
        } else {
            token.check("edit distance one")?;
            let one = self.known(edit_distance_one(word, allow_switch));
            if !one.is_empty() {
                (CandidateSource::EditDistanceOne, one)
            } else {
                let expanded = if self.config.parallel {
                    par_edit_distance_two(word, allow_switch, token)?
                } else {
                    edit_distance_two_cancellable(word, allow_switch, token)?
                };
                let two = self.known(expanded);
                if !two.is_empty() {
                    (CandidateSource::EditDistanceTwo, two)
                } else {
                    (CandidateSource::NotFound, CandidateSet::new())
                }
            }
        };

        trace!("'{}': {} candidates from {:?}", word, candidates.len(), source);
        Ok((source, candidates))
    }

    /// Suggestions for `word` under the configured policies.
    pub fn suggest(&self, word: &str) -> Result<Vec<Suggestion>> {
        self.suggest_cancellable(word, &CancellationToken::new())
    }

    /// Like [`Self::suggest`], polling `token` between stages.
    pub fn suggest_cancellable(
        &self,
        word: &str,
        token: &CancellationToken,
    ) -> Result<Vec<Suggestion>> {
        Ok(self.lookup(word, token)?.1)
    }

    /// Suggestions together with the stage that produced them.
    pub fn lookup(
        &self,
        word: &str,
        token: &CancellationToken,
    ) -> Result<(CandidateSource, Vec<Suggestion>)> {
        let (source, candidates) = self.candidates_cancellable(word, token)?;

        let mut suggestions = candidates
            .into_iter()
            .map(|candidate| -> Result<Suggestion> {
                let probability = self
                    .probabilities
                    .get(&candidate)
                    .copied()
                    .ok_or_else(|| SpellfixError::unknown_word(candidate.as_str()))?;
                Ok(Suggestion::new(candidate, probability))
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(costs) = self.config.distance_costs {
            let engine = MinEditDistance::new(costs);
            for suggestion in &mut suggestions {
                let distance = match self.distance_cache {
                    Some(cache) => cache.distance(word, &suggestion.word, costs),
                    None => engine.distance(word, &suggestion.word),
                };
                suggestion.distance = Some(distance);
            }
        }

        if self.config.ranking == RankingPolicy::Ranked {
            suggestions.sort_by(compare_ranked);
            suggestions.truncate(self.config.max_suggestions);
        }

        Ok((source, suggestions))
    }

    fn known(&self, candidates: CandidateSet) -> CandidateSet {
        candidates
            .into_iter()
            .filter(|candidate| self.vocabulary.contains(candidate))
            .collect()
    }
}

/// Distance ascending (when present), then probability descending, then word.
fn compare_ranked(a: &Suggestion, b: &Suggestion) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| b.probability.total_cmp(&a.probability))
        .then_with(|| a.word.cmp(&b.word))
}

/// Ranked `(word, probability)` suggestions, at most `n` of them.
pub fn suggest_corrections(
    word: &str,
    probabilities: &ProbabilityTable,
    vocabulary: &Vocabulary,
    n: usize,
) -> Result<Vec<(String, f64)>> {
    let config = SuggestionConfig {
        max_suggestions: n,
        ..Default::default()
    };
    let suggestions =
        CorrectionSuggester::with_config(probabilities, vocabulary, config).suggest(word)?;
    Ok(suggestions.into_iter().map(Suggestion::into_pair).collect())
}

/// Every `(word, probability)` survivor of the lookup, alphabetically.
pub fn suggest_corrections_unranked(
    word: &str,
    probabilities: &ProbabilityTable,
    vocabulary: &Vocabulary,
) -> Result<Vec<(String, f64)>> {
    let config = SuggestionConfig {
        ranking: RankingPolicy::Unranked,
        ..Default::default()
    };
    let suggestions =
        CorrectionSuggester::with_config(probabilities, vocabulary, config).suggest(word)?;
    Ok(suggestions.into_iter().map(Suggestion::into_pair).collect())
}
