//! Criterion benchmarks for spellfix.
//!
//! Covers candidate generation at one and two edits, the weighted edit
//! distance (full matrix and two-row scalar), and end-to-end suggestion
//! lookups against a synthetic corpus.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use spellfix::spelling::{
    CancellationToken, DistanceCache, EditCosts, FrequencyModel, MinEditDistance,
    SpellingCorrector, edit_distance_one, edit_distance_two, par_edit_distance_two,
};

const WORDS: [&str; 24] = [
    "spelling", "correction", "distance", "vocabulary", "probability", "candidate", "letter",
    "insert", "delete", "replace", "switch", "corpus", "frequency", "word", "suggest", "matrix",
    "alphabet", "cost", "edit", "known", "rank", "query", "token", "table",
];

/// Generate random lowercase words.
fn generate_random_words(count: usize, max_len: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(1..=max_len);
            (0..len)
                .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
                .collect()
        })
        .collect()
}

/// Build a corpus where earlier words are more frequent.
fn generate_corpus(tokens: usize) -> String {
    let mut rng = StdRng::seed_from_u64(7);
    let mut corpus = String::with_capacity(tokens * 8);
    for _ in 0..tokens {
        let index = rng.random_range(0..WORDS.len()).min(rng.random_range(0..WORDS.len()));
        corpus.push_str(WORDS[index]);
        corpus.push(' ');
    }
    corpus
}

/// Benchmark candidate generation.
fn bench_candidate_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_generation");

    for word in ["at", "what", "spelling"] {
        group.bench_with_input(BenchmarkId::new("edit_distance_one", word), word, |b, w| {
            b.iter(|| black_box(edit_distance_one(black_box(w), true)))
        });
    }

    group.sample_size(10);
    for word in ["what", "speling"] {
        group.bench_with_input(BenchmarkId::new("edit_distance_two", word), word, |b, w| {
            b.iter(|| black_box(edit_distance_two(black_box(w), true)))
        });

        let token = CancellationToken::new();
        group.bench_with_input(
            BenchmarkId::new("par_edit_distance_two", word),
            word,
            |b, w| b.iter(|| black_box(par_edit_distance_two(black_box(w), true, &token))),
        );
    }

    group.finish();
}

/// Benchmark the weighted edit distance.
fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");
    let engine = MinEditDistance::new(EditCosts::default());
    let sources = generate_random_words(100, 12, 1);
    let targets = generate_random_words(100, 12, 2);

    group.bench_function("matrix_single_pair", |b| {
        b.iter(|| black_box(engine.matrix(black_box("intention"), black_box("execution"))))
    });

    group.throughput(Throughput::Elements(sources.len() as u64));
    group.bench_function("matrix_batch", |b| {
        b.iter(|| {
            for (source, target) in sources.iter().zip(&targets) {
                black_box(engine.matrix(source, target));
            }
        })
    });

    group.bench_function("two_row_batch", |b| {
        b.iter(|| {
            for (source, target) in sources.iter().zip(&targets) {
                black_box(engine.distance(source, target));
            }
        })
    });

    let cache = DistanceCache::new();
    group.bench_function("cached_batch", |b| {
        b.iter(|| {
            for (source, target) in sources.iter().zip(&targets) {
                black_box(cache.distance(source, target, EditCosts::default()));
            }
        })
    });

    group.finish();
}

/// Benchmark suggestion lookups.
fn bench_suggestions(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggestions");
    group.sample_size(20);

    let corpus = generate_corpus(20_000);
    let corrector = SpellingCorrector::new(
        FrequencyModel::from_corpus(&corpus).expect("synthetic corpus tokenizes"),
    );

    group.bench_function("build_model", |b| {
        b.iter(|| black_box(FrequencyModel::from_corpus(black_box(&corpus))))
    });

    group.bench_function("known_word", |b| {
        b.iter(|| black_box(corrector.suggest(black_box("spelling"))))
    });

    group.bench_function("one_edit_away", |b| {
        b.iter(|| black_box(corrector.suggest(black_box("speling"))))
    });

    group.bench_function("two_edits_away", |b| {
        b.iter(|| black_box(corrector.suggest(black_box("spleling"))))
    });

    let misspellings = ["correctoin", "distnce", "vocabulry", "probabilty", "freqency"];
    group.throughput(Throughput::Elements(misspellings.len() as u64));
    group.bench_function("suggest_many", |b| {
        b.iter(|| black_box(corrector.suggest_many(black_box(&misspellings))))
    });

    group.finish();
}

criterion_group!(benches, bench_candidate_generation, bench_edit_distance);

// Separate group for slower benchmarks
criterion_group!(slow_benches, bench_suggestions);

criterion_main!(benches, slow_benches);
