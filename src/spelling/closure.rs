//! Candidate sets at edit distance one and two.

use log::debug;
use rayon::prelude::*;

use crate::error::Result;
use crate::spelling::cancellation::CancellationToken;
use crate::spelling::edits::{CandidateSet, deletions, insertions, substitutions, transpositions};

/// Every string reachable from `word` with a single edit.
///
/// Transpositions are included only when `allow_switch` is set. The empty
/// string is a member for one-letter words. A word with two identical adjacent
/// letters contains itself, since swapping them reproduces it.
pub fn edit_distance_one(word: &str, allow_switch: bool) -> CandidateSet {
    let mut candidates = CandidateSet::new();

    candidates.extend(deletions(word));
    candidates.extend(substitutions(word));
    candidates.extend(insertions(word));
    if allow_switch {
        candidates.extend(transpositions(word));
    }

    candidates
}

/// Every string reachable from `word` with two single edits.
///
/// The empty string is never expanded, so a one-letter word does not pick up
/// the 26 single letters that expanding `""` would add.
pub fn edit_distance_two(word: &str, allow_switch: bool) -> CandidateSet {
    let mut candidates = CandidateSet::new();

    for intermediate in edit_distance_one(word, allow_switch) {
        if intermediate.is_empty() {
            continue;
        }
        candidates.extend(edit_distance_one(&intermediate, allow_switch));
    }

    debug!("edit_distance_two('{}'): {} candidates", word, candidates.len());
    candidates
}

/// Like [`edit_distance_two`], polling `token` before every expansion.
pub fn edit_distance_two_cancellable(
    word: &str,
    allow_switch: bool,
    token: &CancellationToken,
) -> Result<CandidateSet> {
    token.check("edit distance one")?;
    let mut candidates = CandidateSet::new();

    for intermediate in edit_distance_one(word, allow_switch) {
        if intermediate.is_empty() {
            continue;
        }
        token.check("edit distance two expansion")?;
        candidates.extend(edit_distance_one(&intermediate, allow_switch));
    }

    Ok(candidates)
}

/// Parallel [`edit_distance_two`].
///
/// Distance-one intermediates are expanded on the rayon pool and the partial
/// sets are merged in whatever order the workers finish.
pub fn par_edit_distance_two(
    word: &str,
    allow_switch: bool,
    token: &CancellationToken,
) -> Result<CandidateSet> {
    token.check("edit distance one")?;
    let intermediates = edit_distance_one(word, allow_switch);

    let candidates = intermediates
        .par_iter()
        .filter(|intermediate| !intermediate.is_empty())
        .map(|intermediate| -> Result<CandidateSet> {
            token.check("edit distance two expansion")?;
            Ok(edit_distance_one(intermediate, allow_switch))
        })
        .try_reduce(CandidateSet::new, |mut merged, mut partial| {
            if merged.len() < partial.len() {
                std::mem::swap(&mut merged, &mut partial);
            }
            merged.extend(partial);
            Ok(merged)
        })?;

    debug!(
        "par_edit_distance_two('{}'): {} candidates from {} intermediates",
        word,
        candidates.len(),
        intermediates.len()
    );
    Ok(candidates)
}
