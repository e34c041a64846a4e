//! Elementary single-edit candidate generation.
//!
//! Each function here applies one family of edits at every position of a word
//! and returns the raw results. Callers that want set semantics collect into a
//! [`CandidateSet`].

use std::collections::BTreeSet;

/// The fixed alphabet used by substitutions and insertions.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A set of candidate strings. Iteration order is deterministic.
pub type CandidateSet = BTreeSet<String>;

/// Remove one character at every position.
///
/// Yields exactly `len(word)` strings; repeated letters produce duplicates.
pub fn deletions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();

    (0..chars.len())
        .map(|i| chars[..i].iter().chain(&chars[i + 1..]).collect())
        .collect()
}

/// Swap every pair of adjacent characters.
///
/// Yields `len(word) - 1` strings, or none for words shorter than two.
pub fn transpositions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();

    (0..chars.len().saturating_sub(1))
        .map(|i| {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            swapped.into_iter().collect()
        })
        .collect()
}

/// Substitute every position with every letter of [`ALPHABET`].
///
/// The word itself is never part of the result, even though substituting a
/// letter with itself would produce it. Output is sorted and free of
/// duplicates.
pub fn substitutions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut replaced = BTreeSet::new();

    for i in 0..chars.len() {
        for &letter in &ALPHABET {
            if letter == chars[i] {
                continue;
            }
            let mut candidate = chars.clone();
            candidate[i] = letter;
            replaced.insert(candidate.into_iter().collect::<String>());
        }
    }

    replaced.into_iter().collect()
}

/// Insert every letter of [`ALPHABET`] at each of the `len(word) + 1` gaps.
///
/// Yields exactly `26 * (len(word) + 1)` strings.
pub fn insertions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut inserted = Vec::with_capacity(ALPHABET.len() * (chars.len() + 1));

    for i in 0..=chars.len() {
        for &letter in &ALPHABET {
            let mut candidate = String::with_capacity(word.len() + 1);
            candidate.extend(&chars[..i]);
            candidate.push(letter);
            candidate.extend(&chars[i..]);
            inserted.push(candidate);
        }
    }

    inserted
}
