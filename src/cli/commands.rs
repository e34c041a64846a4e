//! Command implementations for the spellfix CLI.

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: SpellfixArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest_words(suggest_args.clone(), &args),
        Command::Correct(correct_args) => correct_text(correct_args.clone(), &args),
        Command::Distance(distance_args) => compute_distance(distance_args.clone(), &args),
        Command::Edits(edits_args) => list_edits(edits_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load the corrector configuration named by `--config`, or the defaults.
fn load_config(cli_args: &SpellfixArgs) -> Result<CorrectorConfig> {
    match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            CorrectorConfig::from_file(path)
        }
        None => Ok(CorrectorConfig::default()),
    }
}

/// Build the frequency model from a corpus or a frequency file.
fn load_model(args: &CorpusArgs) -> Result<FrequencyModel> {
    info!("Loading corpus from {}", args.corpus.display());
    let model = if args.frequency_file {
        FrequencyModel::load_from_frequency_file(&args.corpus)?
    } else {
        FrequencyModel::from_file(&args.corpus)?
    };
    info!("{} distinct words, {} tokens", model.word_count(), model.total_count());
    Ok(model)
}

/// Suggest corrections for each word.
fn suggest_words(args: SuggestArgs, cli_args: &SpellfixArgs) -> Result<()> {
    let mut config = load_config(cli_args)?;
    let suggestion = &mut config.suggestion;
    if let Some(limit) = args.limit {
        suggestion.max_suggestions = limit;
    }
    if args.unranked {
        suggestion.ranking = RankingPolicy::Unranked;
    }
    if args.no_switch {
        suggestion.allow_switch = false;
    }
    if args.include_neighbors {
        suggestion.exact_match = ExactMatchPolicy::IncludeNeighbors;
    }
    if args.parallel {
        suggestion.parallel = true;
    }
    debug!("Suggestion config: {:?}", config.suggestion);

    let model = load_model(&args.corpus)?;
    let suggester = CorrectionSuggester::with_config(
        model.probabilities(),
        model.vocabulary(),
        config.suggestion,
    );
    let token = CancellationToken::new();

    let results = args
        .words
        .iter()
        .map(|word| -> Result<WordSuggestions> {
            let word = word.to_lowercase();
            let (source, suggestions) = suggester.lookup(&word, &token)?;
            Ok(WordSuggestions {
                word,
                source,
                suggestions,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Suggestions computed",
        &SuggestResults { results },
        cli_args,
    )
}

/// Correct every unknown token of a text.
fn correct_text(args: CorrectArgs, cli_args: &SpellfixArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let corrector = SpellingCorrector::with_config(load_model(&args.corpus)?, config);

    let corrections = corrector.correct_text(&args.text)?;
    let corrected = rewrite_with_best(&args.text.to_lowercase(), &corrections);

    output_result(
        "Text corrected",
        &CorrectionResults {
            text: args.text,
            corrected,
            corrections,
        },
        cli_args,
    )
}

/// Replace each corrected span of the lowercased text with its best suggestion.
fn rewrite_with_best(text: &str, corrections: &[WordCorrection]) -> String {
    let mut rewritten = String::with_capacity(text.len());
    let mut cursor = 0;

    for correction in corrections {
        let Some(best) = correction.best() else {
            continue;
        };
        let Some(before) = text.get(cursor..correction.start_offset) else {
            continue;
        };
        rewritten.push_str(before);
        rewritten.push_str(&best.word);
        cursor = correction.end_offset;
    }

    rewritten.push_str(text.get(cursor..).unwrap_or_default());
    rewritten
}

/// Compute the weighted edit distance between two strings.
fn compute_distance(args: DistanceArgs, cli_args: &SpellfixArgs) -> Result<()> {
    let (matrix, distance) = min_edit_distance(
        &args.source,
        &args.target,
        args.insert_cost,
        args.delete_cost,
        args.replace_cost,
    )?;

    let result = DistanceResult {
        source: args.source,
        target: args.target,
        costs: matrix.costs(),
        distance,
        matrix: args.matrix.then(|| matrix.to_rows()),
        matrix_table: args.matrix.then(|| matrix.to_string()),
        alignment: args.alignment.then(|| matrix.alignment()),
    };

    output_result("Edit distance computed", &result, cli_args)
}

/// List the strings within one or two edits of a word.
fn list_edits(args: EditsArgs, cli_args: &SpellfixArgs) -> Result<()> {
    let allow_switch = !args.no_switch;
    let candidates = if args.distance == 1 {
        edit_distance_one(&args.word, allow_switch)
    } else {
        par_edit_distance_two(&args.word, allow_switch, &CancellationToken::new())?
    };

    let total = candidates.len();
    let candidates = candidates
        .into_iter()
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    output_result(
        "Edit candidates generated",
        &EditsResult {
            word: args.word,
            distance: args.distance,
            allow_switch,
            total,
            candidates,
        },
        cli_args,
    )
}

/// Show statistics about a corpus, optionally writing its frequency table.
fn show_stats(args: StatsArgs, cli_args: &SpellfixArgs) -> Result<()> {
    let model = load_model(&args.corpus)?;

    let top_words = model
        .most_frequent_words(args.top)
        .into_iter()
        .map(|(word, count)| -> Result<WordFrequency> {
            let probability = model.probability(&word)?;
            Ok(WordFrequency {
                word,
                count,
                probability,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let saved_to = match &args.save {
        Some(path) => {
            model.save_to_file(path)?;
            Some(path.display().to_string())
        }
        None => None,
    };

    output_result(
        "Corpus statistics",
        &CorpusStats {
            vocabulary_size: model.word_count(),
            total_tokens: model.total_count(),
            top_words,
            saved_to,
        },
        cli_args,
    )
}
