//! Pipeline benchmarks with 95% confidence intervals.
//!
//! Run with: cargo bench
//! JSON output: cargo criterion --message-format json

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use clt_sim::domains::{curve, generate, resample, summarize, Domain, Histogram};
use clt_sim::prelude::*;

/// Population generation for each distribution family.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(50);
    group.confidence_level(0.95);

    for preset in DistributionPreset::ALL {
        let spec = preset.spec();
        group.bench_with_input(BenchmarkId::new("population_100k", preset), &spec, |b, spec| {
            let mut rng = SimRng::new(42);
            b.iter(|| black_box(generate(spec, 100_000, &mut rng)));
        });
    }

    group.finish();
}

/// Resampling cost scales with `sample_size * sample_count`.
fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    group.sample_size(100);
    group.confidence_level(0.95);

    let mut rng = SimRng::new(42);
    let Ok(population) = generate(&DistributionPreset::Uniform.spec(), 100_000, &mut rng) else {
        return;
    };

    for (n, count) in [(1, 500), (30, 500), (500, 10_000)] {
        group.bench_with_input(
            BenchmarkId::new("means", format!("n{n}_x{count}")),
            &(n, count),
            |b, &(n, count)| {
                let mut rng = SimRng::new(7);
                b.iter(|| black_box(resample(&population, n, count, &mut rng)));
            },
        );
    }

    group.finish();
}

/// Summary, curve and histogram stages.
fn bench_presentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("presentation");
    group.sample_size(100);

    let mut rng = SimRng::new(42);
    let Ok(population) = generate(&DistributionPreset::Exponential.spec(), 100_000, &mut rng)
    else {
        return;
    };

    group.bench_function("summarize_100k", |b| {
        b.iter(|| black_box(summarize(&population, 30)));
    });
    group.bench_function("curve_1000", |b| {
        b.iter(|| black_box(curve(2.0, 0.365, Domain::new(0.5, 3.5), 1000)));
    });
    group.bench_function("histogram_100k_50", |b| {
        b.iter(|| black_box(Histogram::density(population.values(), 50)));
    });

    group.finish();
}

/// One full engine run with the default parameters.
fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.sample_size(20);

    let Ok(mut engine) = CltEngine::new(SimConfig::default()) else {
        return;
    };
    group.bench_function("run_default", |b| {
        b.iter(|| black_box(engine.run_default()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generate,
    bench_resample,
    bench_presentation,
    bench_full_run
);
criterion_main!(benches);
