use std::fs;
use std::thread;

use tempfile::TempDir;

use spellfix::error::{Result, SpellfixError};
use spellfix::spelling::{
    CancellationToken, CandidateSource, CorrectionSuggester, CorrectorConfig, EditCosts,
    ExactMatchPolicy, FrequencyModel, ProbabilityTable, RankingPolicy, SpellingCorrector,
    SuggestionConfig, Vocabulary, suggest_corrections, suggest_corrections_unranked,
};

const SONNET: &str = "The days of our youth are the days of our glory. \
                      Dye not thy beard, for in those days the dye was dear, \
                      and thy heart was young.";

fn counted_model() -> FrequencyModel {
    FrequencyModel::from_counts([
        ("days", 5),
        ("dye", 1),
        ("day", 10),
        ("eye", 4),
        ("yes", 3),
        ("the", 20),
        ("heart", 2),
    ])
    .expect("counts fit in u64")
}

fn words(suggestions: &[(String, f64)]) -> Vec<&str> {
    suggestions.iter().map(|(word, _)| word.as_str()).collect()
}

#[test]
fn dys_suggests_days_and_dye_from_corpus() -> Result<()> {
    let model = FrequencyModel::from_corpus(SONNET)?;
    let suggestions = suggest_corrections("dys", model.probabilities(), model.vocabulary(), 2)?;

    assert_eq!(words(&suggestions), vec!["days", "dye"]);
    for (word, probability) in &suggestions {
        let expected = model.count(word) as f64 / model.total_count() as f64;
        assert!((probability - expected).abs() < f64::EPSILON, "{word}");
    }
    Ok(())
}

#[test]
fn known_word_short_circuits() -> Result<()> {
    let model = counted_model();
    let suggestions = suggest_corrections("day", model.probabilities(), model.vocabulary(), 5)?;

    assert_eq!(suggestions, vec![("day".to_string(), 10.0 / 45.0)]);
    Ok(())
}

#[test]
fn known_word_can_include_neighbors() -> Result<()> {
    let model = counted_model();
    let config = SuggestionConfig {
        exact_match: ExactMatchPolicy::IncludeNeighbors,
        ..Default::default()
    };
    let suggester =
        CorrectionSuggester::with_config(model.probabilities(), model.vocabulary(), config);

    let (source, suggestions) = suggester.lookup("day", &CancellationToken::new())?;
    let found: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();

    assert_eq!(source, CandidateSource::Exact);
    assert_eq!(found, vec!["day", "days"]);
    Ok(())
}

#[test]
fn ranked_limit_and_unranked_order() -> Result<()> {
    let model = counted_model();
    let (probabilities, vocabulary) = (model.probabilities(), model.vocabulary());

    let ranked = suggest_corrections("eys", probabilities, vocabulary, 1)?;
    assert_eq!(words(&ranked), vec!["eye"]);

    let unranked = suggest_corrections_unranked("eys", probabilities, vocabulary)?;
    assert_eq!(words(&unranked), vec!["eye", "yes"]);
    assert!((unranked[1].1 - 3.0 / 45.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn switch_toggle_changes_the_cascade_stage() -> Result<()> {
    let model = counted_model();
    let mut config = SuggestionConfig::default();

    let suggester =
        CorrectionSuggester::with_config(model.probabilities(), model.vocabulary(), config.clone());
    let (source, candidates) = suggester.candidates("haert")?;
    assert_eq!(source, CandidateSource::EditDistanceOne);
    assert!(candidates.contains("heart"));

    config.allow_switch = false;
    let suggester =
        CorrectionSuggester::with_config(model.probabilities(), model.vocabulary(), config);
    let (source, candidates) = suggester.candidates("haert")?;
    assert_eq!(source, CandidateSource::EditDistanceTwo);
    assert!(candidates.contains("heart"));
    Ok(())
}

#[test]
fn parallel_distance_two_matches_sequential() -> Result<()> {
    let model = counted_model();
    let sequential = CorrectionSuggester::new(model.probabilities(), model.vocabulary());
    let parallel = CorrectionSuggester::with_config(
        model.probabilities(),
        model.vocabulary(),
        SuggestionConfig {
            parallel: true,
            ..Default::default()
        },
    );

    for word in ["hrat", "dyxx", "thhe", "qqqqqqqqq"] {
        assert_eq!(sequential.suggest(word)?, parallel.suggest(word)?, "{word}");
    }
    assert!(parallel.suggest("qqqqqqqqq")?.is_empty());
    Ok(())
}

#[test]
fn cost_aware_ranking_prefers_cheaper_edits() -> Result<()> {
    let model = counted_model();
    let (probabilities, vocabulary) = (model.probabilities(), model.vocabulary());

    let by_probability = suggest_corrections("das", probabilities, vocabulary, 5)?;
    assert_eq!(words(&by_probability), vec!["day", "days"]);

    let config = SuggestionConfig {
        distance_costs: Some(EditCosts::new(1, 1, 5)?),
        ..Default::default()
    };
    let suggestions =
        CorrectionSuggester::with_config(probabilities, vocabulary, config).suggest("das")?;
    let ranked: Vec<(&str, Option<u64>)> = suggestions
        .iter()
        .map(|s| (s.word.as_str(), s.distance))
        .collect();
    assert_eq!(ranked, vec![("days", Some(1)), ("day", Some(2))]);
    Ok(())
}

#[test]
fn missing_probability_is_an_error() {
    let mut vocabulary = Vocabulary::default();
    vocabulary.insert("days".to_string());
    let mut probabilities = ProbabilityTable::default();
    probabilities.insert("dye".to_string(), 1.0);

    match suggest_corrections("dys", &probabilities, &vocabulary, 2) {
        Err(SpellfixError::UnknownWord(word)) => assert_eq!(word, "days"),
        other => panic!("expected unknown word, got {other:?}"),
    }
}

#[test]
fn cancelled_lookup_stops() {
    let model = counted_model();
    let suggester = CorrectionSuggester::new(model.probabilities(), model.vocabulary());
    let token = CancellationToken::new();
    token.cancel();

    assert!(matches!(
        suggester.suggest_cancellable("hrat", &token),
        Err(SpellfixError::OperationCancelled(_))
    ));
}

#[test]
fn shared_corrector_serves_concurrent_queries() -> Result<()> {
    let corrector = SpellingCorrector::new(counted_model());
    let queries = ["dys", "eys", "hart", "teh", "qqqqqqqqq"];
    let expected = queries
        .iter()
        .map(|word| corrector.suggest(word))
        .collect::<Result<Vec<_>>>()?;

    thread::scope(|scope| -> Result<()> {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    queries
                        .iter()
                        .map(|word| corrector.suggest(word))
                        .collect::<Result<Vec<_>>>()
                })
            })
            .collect();

        for handle in handles {
            let results = handle.join().expect("query thread panicked")?;
            assert_eq!(results, expected);
        }
        Ok(())
    })
}

#[test]
fn corrector_from_frequency_file_and_config() -> Result<()> {
    let dir = TempDir::new()?;
    let counts_path = dir.path().join("counts.txt");
    let config_path = dir.path().join("config.json");

    fs::write(
        &counts_path,
        "# word counts\nthe 20\nday 10\ndays 5\nbroken line here\neye 4\n",
    )?;
    fs::write(
        &config_path,
        r#"{ "suggestion": { "max_suggestions": 1 }, "min_word_length": 3 }"#,
    )?;

    let model = FrequencyModel::load_from_frequency_file(&counts_path)?;
    assert_eq!(model.word_count(), 4);
    assert_eq!(model.total_count(), 39);

    let config = CorrectorConfig::from_file(&config_path)?;
    assert_eq!(config.suggestion.ranking, RankingPolicy::Ranked);
    let corrector = SpellingCorrector::with_config(model, config);

    let corrections = corrector.correct_text("Teh dya ey was long")?;
    let fixed: Vec<(&str, Option<&str>)> = corrections
        .iter()
        .map(|c| (c.word.as_str(), c.best().map(|s| s.word.as_str())))
        .collect();
    assert_eq!(
        fixed,
        vec![
            ("teh", Some("the")),
            ("dya", Some("day")),
            ("was", Some("day")),
            ("long", None),
        ]
    );
    Ok(())
}
