//! Benchmarks for kingdom runs and starting-cash sweeps.
//!
//! The sweep is the hot path: a thousand full runs per invocation.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use miscellania::{Kingdom, KingdomConfig, SweepConfig, run_sweep};

fn bench_single_run(c: &mut Criterion) {
    let config = KingdomConfig::new(1_000_000.0, 125_000.0);

    c.bench_function("single_run_1m", |b| {
        b.iter(|| {
            let mut kingdom = Kingdom::new(black_box(config)).unwrap();
            black_box(kingdom.spend_all_money().unwrap())
        });
    });
}

fn bench_large_run(c: &mut Criterion) {
    // Ten million starting cash runs for over two hundred days
    let config = KingdomConfig::new(10_000_000.0, 125_000.0).with_quest(false);

    c.bench_function("single_run_10m_no_quest", |b| {
        b.iter(|| {
            let mut kingdom = Kingdom::new(black_box(config)).unwrap();
            black_box(kingdom.spend_all_money().unwrap())
        });
    });
}

fn bench_default_sweep(c: &mut Criterion) {
    let config = SweepConfig::default();

    let mut group = c.benchmark_group("sweep");
    group.sample_size(20);
    group.bench_function("default_1001_points", |b| {
        b.iter(|| black_box(run_sweep(black_box(&config)).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_single_run, bench_large_run, bench_default_sweep);
criterion_main!(benches);
