//! Benchmarks for the awards aggregation
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic dataset so the bench runs without the CSV file.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{AwardIndex, AwardRecord};
use pipeline::compute_awards_summary;

fn synthetic_records(producers: usize, wins_per_producer: usize) -> Vec<AwardRecord> {
    let mut records = Vec::with_capacity(producers * wins_per_producer * 2);
    for p in 0..producers {
        for w in 0..wins_per_producer {
            let year = 1980 + ((p * 7 + w * 3) % 45) as u16;
            records.push(AwardRecord::winner(format!("Producer {}", p), year));
            records.push(AwardRecord::nominee(format!("Nominee {}", p), year));
        }
    }
    records
}

fn bench_compute_summary(c: &mut Criterion) {
    let records = synthetic_records(2_000, 5);

    c.bench_function("compute_awards_summary", |b| {
        b.iter(|| {
            let summary = compute_awards_summary(black_box(&records));
            black_box(summary)
        })
    });
}

fn bench_index_winners_then_summary(c: &mut Criterion) {
    let index: AwardIndex = synthetic_records(2_000, 5).into_iter().collect();

    c.bench_function("winning_records_and_summary", |b| {
        b.iter(|| {
            let winners = index.winning_records();
            black_box(compute_awards_summary(&winners))
        })
    });
}

criterion_group!(benches, bench_compute_summary, bench_index_winners_then_summary);
criterion_main!(benches);
