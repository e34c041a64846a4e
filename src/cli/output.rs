//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::args::{OutputFormat, SpellfixArgs};
use crate::error::Result;
use crate::spelling::{CandidateSource, EditCosts, EditOp, EditStep, Suggestion, WordCorrection};

/// Suggestions for one queried word.
#[derive(Debug, Serialize)]
pub struct WordSuggestions {
    pub word: String,
    pub source: CandidateSource,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize)]
pub struct SuggestResults {
    pub results: Vec<WordSuggestions>,
}

/// Result structure for the correct command.
#[derive(Debug, Serialize)]
pub struct CorrectionResults {
    pub text: String,
    pub corrected: String,
    pub corrections: Vec<WordCorrection>,
}

/// Result structure for the distance command.
#[derive(Debug, Serialize)]
pub struct DistanceResult {
    pub source: String,
    pub target: String,
    pub costs: EditCosts,
    pub distance: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<u64>>>,
    /// Labelled grid for human output.
    #[serde(skip)]
    pub matrix_table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Vec<EditStep>>,
}

/// Result structure for the edits command.
#[derive(Debug, Serialize)]
pub struct EditsResult {
    pub word: String,
    pub distance: u8,
    pub allow_switch: bool,
    /// Size of the full candidate set, before any display limit.
    pub total: usize,
    pub candidates: Vec<String>,
}

/// A corpus word with its count and probability.
#[derive(Debug, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
    pub probability: f64,
}

/// Corpus statistics.
#[derive(Debug, Serialize)]
pub struct CorpusStats {
    pub vocabulary_size: usize,
    pub total_tokens: u64,
    pub top_words: Vec<WordFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SpellfixArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &SpellfixArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellfixArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "═".repeat(title.chars().count()));
}

fn source_label(source: CandidateSource) -> &'static str {
    match source {
        CandidateSource::Exact => "known word",
        CandidateSource::EditDistanceOne => "one edit away",
        CandidateSource::EditDistanceTwo => "two edits away",
        CandidateSource::NotFound => "no candidates",
    }
}

fn op_label(op: EditOp) -> &'static str {
    match op {
        EditOp::Match => "match",
        EditOp::Substitute => "substitute",
        EditOp::Insert => "insert",
        EditOp::Delete => "delete",
    }
}

fn format_suggestions(out: &mut String, suggestions: &[Suggestion]) {
    for (i, suggestion) in suggestions.iter().enumerate() {
        let _ = write!(
            out,
            "  {}. {} (p = {:.6})",
            i + 1,
            suggestion.word,
            suggestion.probability
        );
        if let Some(distance) = suggestion.distance {
            let _ = write!(out, " [distance {distance}]");
        }
        out.push('\n');
    }
}

impl HumanOutput for SuggestResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(&mut out, "Suggestions:");

        for result in &self.results {
            out.push('\n');
            let _ = writeln!(out, "{} ({})", result.word, source_label(result.source));
            if result.suggestions.is_empty() {
                let _ = writeln!(out, "  (none)");
            }
            format_suggestions(&mut out, &result.suggestions);
        }
        out
    }
}

impl HumanOutput for CorrectionResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(&mut out, "Corrections:");

        if self.corrections.is_empty() {
            let _ = writeln!(out, "No unknown words.");
        }
        for correction in &self.corrections {
            out.push('\n');
            let _ = writeln!(
                out,
                "{} at {}..{} ({})",
                correction.word,
                correction.start_offset,
                correction.end_offset,
                source_label(correction.source)
            );
            format_suggestions(&mut out, &correction.suggestions);
        }

        out.push('\n');
        let _ = writeln!(out, "Corrected: {}", self.corrected);
        out
    }
}

impl HumanOutput for DistanceResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(&mut out, "Edit Distance:");
        let _ = writeln!(out, "Source: {}", self.source);
        let _ = writeln!(out, "Target: {}", self.target);
        let _ = writeln!(
            out,
            "Costs: insert={} delete={} replace={}",
            self.costs.insert, self.costs.delete, self.costs.replace
        );
        let _ = writeln!(out, "Distance: {}", self.distance);

        if let Some(table) = &self.matrix_table {
            out.push('\n');
            let _ = writeln!(out, "Matrix:");
            let _ = writeln!(out, "───────");
            let _ = writeln!(out, "{table}");
        }

        if let Some(alignment) = &self.alignment {
            out.push('\n');
            let _ = writeln!(out, "Alignment:");
            let _ = writeln!(out, "──────────");
            for step in alignment {
                let _ = writeln!(
                    out,
                    "  {:<10} {} -> {}  ({})",
                    op_label(step.op),
                    step.source.unwrap_or('-'),
                    step.target.unwrap_or('-'),
                    step.cost
                );
            }
        }
        out
    }
}

impl HumanOutput for EditsResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(&mut out, "Edit Candidates:");
        let _ = writeln!(
            out,
            "{} candidates within {} edit(s) of '{}'{}",
            self.total,
            self.distance,
            self.word,
            if self.allow_switch { "" } else { " (no switch)" }
        );
        for candidate in &self.candidates {
            let _ = writeln!(out, "  {candidate:?}");
        }
        if self.candidates.len() < self.total {
            let _ = writeln!(out, "  ... {} more", self.total - self.candidates.len());
        }
        out
    }
}

impl HumanOutput for CorpusStats {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(&mut out, "Corpus Statistics:");
        let _ = writeln!(out, "Vocabulary size: {}", self.vocabulary_size);
        let _ = writeln!(out, "Total tokens: {}", self.total_tokens);

        if !self.top_words.is_empty() {
            out.push('\n');
            let _ = writeln!(out, "Most frequent words:");
            let _ = writeln!(out, "────────────────────");
            for entry in &self.top_words {
                let _ = writeln!(
                    out,
                    "  {:<20} {:>8}  {:.6}",
                    entry.word, entry.count, entry.probability
                );
            }
        }

        if let Some(path) = &self.saved_to {
            out.push('\n');
            let _ = writeln!(out, "Frequency table written to {path}");
        }
        out
    }
}
