//! Command line argument parsing for the spellfix CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// spellfix - spelling suggestions and weighted edit distance
#[derive(Parser, Debug, Clone)]
#[command(name = "spellfix")]
#[command(about = "Spelling suggestions and weighted edit distance")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellfixArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPELLFIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellfixArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for words against a corpus
    Suggest(SuggestArgs),

    /// Correct every unknown word of a text
    Correct(CorrectArgs),

    /// Compute the weighted edit distance between two strings
    Distance(DistanceArgs),

    /// List the candidate strings one or two edits away from a word
    Edits(EditsArgs),

    /// Show corpus statistics
    Stats(StatsArgs),
}

/// Where the vocabulary comes from.
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Corpus file (plain text, or "word count" lines with --frequency-file)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Treat CORPUS as a frequency file with one "word count" pair per line
    #[arg(long)]
    pub frequency_file: bool,
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Maximum number of suggestions per word
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Return every candidate alphabetically instead of the top N by probability
    #[arg(long)]
    pub unranked: bool,

    /// Do not count adjacent transpositions as a single edit
    #[arg(long)]
    pub no_switch: bool,

    /// Also suggest known neighbors of words that are already correct
    #[arg(long)]
    pub include_neighbors: bool,

    /// Expand edit-distance-two candidates in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for correcting a text
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Text to correct
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for the edit distance computation
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// Source string
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Target string
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Cost of inserting a character
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub insert_cost: i64,

    /// Cost of deleting a character
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub delete_cost: i64,

    /// Cost of replacing a character
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub replace_cost: i64,

    /// Print the full distance matrix
    #[arg(short, long)]
    pub matrix: bool,

    /// Print one cheapest alignment
    #[arg(short, long)]
    pub alignment: bool,
}

/// Arguments for listing edit candidates
#[derive(Parser, Debug, Clone)]
pub struct EditsArgs {
    /// Word to expand
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Number of edits (1 or 2)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub distance: u8,

    /// Do not include adjacent transpositions
    #[arg(long)]
    pub no_switch: bool,

    /// Print at most this many candidates
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Number of most frequent words to show
    #[arg(short, long, default_value_t = 10)]
    pub top: usize,

    /// Write the frequency table to this file
    #[arg(long, value_name = "OUTPUT")]
    pub save: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_args_parsing() {
        let args = SpellfixArgs::try_parse_from(["spellfix", "distance", "what", "waht"]).unwrap();

        assert_eq!(args.verbosity(), 1);
        assert!(matches!(args.output_format, OutputFormat::Human));
        match args.command {
            Command::Distance(distance) => {
                assert_eq!(distance.source, "what");
                assert_eq!(distance.target, "waht");
                assert_eq!(distance.insert_cost, 1);
                assert_eq!(distance.delete_cost, 1);
                assert_eq!(distance.replace_cost, 2);
                assert!(!distance.matrix);
            }
            _ => panic!("Expected distance command"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SpellfixArgs::try_parse_from(["spellfix", "-vvv", "edits", "a"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = SpellfixArgs::try_parse_from(["spellfix", "-q", "-vv", "edits", "a"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_suggest_args() {
        let args = SpellfixArgs::try_parse_from([
            "spellfix",
            "--format",
            "json",
            "suggest",
            "big.txt",
            "dys",
            "speling",
            "-n",
            "3",
            "--no-switch",
        ])
        .unwrap();

        assert!(matches!(args.output_format, OutputFormat::Json));
        match args.command {
            Command::Suggest(suggest) => {
                assert_eq!(suggest.corpus.corpus, PathBuf::from("big.txt"));
                assert!(!suggest.corpus.frequency_file);
                assert_eq!(suggest.words, vec!["dys", "speling"]);
                assert_eq!(suggest.limit, Some(3));
                assert!(suggest.no_switch);
                assert!(!suggest.unranked);
            }
            _ => panic!("Expected suggest command"),
        }
    }

    #[test]
    fn test_suggest_requires_word() {
        assert!(SpellfixArgs::try_parse_from(["spellfix", "suggest", "big.txt"]).is_err());
    }

    #[test]
    fn test_negative_cost_parses() {
        let args = SpellfixArgs::try_parse_from([
            "spellfix",
            "distance",
            "a",
            "b",
            "--insert-cost",
            "-1",
        ])
        .unwrap();
        match args.command {
            Command::Distance(distance) => assert_eq!(distance.insert_cost, -1),
            _ => panic!("Expected distance command"),
        }
    }

    #[test]
    fn test_edits_distance_range() {
        assert!(SpellfixArgs::try_parse_from(["spellfix", "edits", "a", "-d", "2"]).is_ok());
        assert!(SpellfixArgs::try_parse_from(["spellfix", "edits", "a", "-d", "3"]).is_err());
    }
}
