// Performance benchmarks for the fairmeta pipeline and recommender
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fairmeta_core::{Enricher, Normalizer, Record, Scorer};
use fairmeta_recommend::Recommender;
use serde_json::json;

fn generate_raw_record(id: usize) -> serde_json::Value {
    json!({
        "title": format!("Station climate archive {}", id),
        "description": format!(
            "Hourly observations from weather station {} including temperature \
             and precipitation, published as 10.5555/station.{}",
            id, id
        ),
        "keywords": "climate, temperature, stations",
        "license": "CC-BY-4.0",
        "format": "csv",
        "publisher": "Example Org",
        "creators": [{"name": "Ada Lovelace", "email": "ada@example.org"}],
    })
}

fn generate_corpus(size: usize) -> Vec<Record> {
    let normalizer = Normalizer::default();
    let enricher = Enricher::default();
    (0..size)
        .map(|i| {
            let mut rec = normalizer.normalize(&generate_raw_record(i));
            enricher.enrich(&mut rec);
            rec
        })
        .collect()
}

fn benchmark_pipeline(c: &mut Criterion) {
    let normalizer = Normalizer::default();
    let enricher = Enricher::default();
    let scorer = Scorer::default();
    let raw = generate_raw_record(42);

    c.bench_function("normalize_enrich_score", |b| {
        b.iter(|| {
            let mut rec = normalizer.normalize(black_box(&raw));
            enricher.enrich(&mut rec);
            black_box(scorer.score(&rec))
        });
    });
}

fn benchmark_recommender(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommender");

    for size in [100, 1000].iter() {
        let corpus = generate_corpus(*size);

        group.bench_with_input(BenchmarkId::new("fit", size), size, |b, _| {
            b.iter(|| {
                let mut recommender = Recommender::new(black_box(&corpus));
                recommender.fit();
                black_box(recommender)
            });
        });

        let mut fitted = Recommender::new(&corpus);
        fitted.fit();
        group.bench_with_input(BenchmarkId::new("query", size), size, |b, _| {
            b.iter(|| black_box(fitted.recommend_for_query("climate temperature", 10)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_pipeline, benchmark_recommender);
criterion_main!(benches);
