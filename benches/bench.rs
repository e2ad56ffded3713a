// Criterion benchmarks for Lume Similarity

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use lume_similarity::core::{
    cosine::cosine_similarity,
    jaro_winkler::jaro_winkler,
    levenshtein::levenshtein_distance,
    ngram::ngram_similarity,
    SimilarityEngine,
};
use lume_similarity::models::SchemeKind;

const SHORT: &str = "Apt 411 Washington DC 20001";
const LONG: &str = "1730 7th St NW Apt 411, Washington, DC 20001";

fn bench_metrics(c: &mut Criterion) {
    c.bench_function("levenshtein_distance", |b| {
        b.iter(|| levenshtein_distance(black_box(SHORT), black_box(LONG)));
    });

    c.bench_function("jaro_winkler", |b| {
        b.iter(|| jaro_winkler(black_box(SHORT), black_box(LONG)));
    });

    c.bench_function("cosine_similarity", |b| {
        b.iter(|| cosine_similarity(black_box(SHORT), black_box(LONG)));
    });

    c.bench_function("ngram_similarity", |b| {
        b.iter(|| ngram_similarity(black_box(SHORT), black_box(LONG), 2));
    });
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for parallel in [false, true] {
        let engine = SimilarityEngine::new(SchemeKind::FourMetric, 2, parallel)
            .expect("valid engine settings");

        group.bench_with_input(
            BenchmarkId::new("four_metric", if parallel { "parallel" } else { "sequential" }),
            &engine,
            |b, engine| {
                b.iter(|| engine.classify(black_box(SHORT), black_box(LONG)));
            },
        );
    }

    let two_metric = SimilarityEngine::new(SchemeKind::TwoMetric, 2, false)
        .expect("valid engine settings");
    group.bench_function("two_metric", |b| {
        b.iter(|| two_metric.classify(black_box(SHORT), black_box(LONG)));
    });

    group.finish();
}

fn bench_input_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein_by_length");

    for repeat in [1, 4, 16, 64].iter() {
        let a = SHORT.repeat(*repeat);
        let b = LONG.repeat(*repeat);

        group.bench_with_input(
            BenchmarkId::new("distance", a.len()),
            repeat,
            |bench, _| {
                bench.iter(|| levenshtein_distance(black_box(&a), black_box(&b)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_metrics,
    bench_classify,
    bench_input_length
);

criterion_main!(benches);
