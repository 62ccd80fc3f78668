//! Criterion benchmarks for the closed-form kernels and option queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::{FactorSet, OptionType};
use pricer_models::analytical::{european, perpetual_american};
use pricer_models::instruments::EuropeanOption;

fn factors() -> FactorSet {
    FactorSet::new(1.5, 120.0, 0.4, 0.04, 0.0, 100.0)
}

/// Benchmark raw kernel evaluation.
fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");
    let f = factors();

    group.bench_function("european_call_price", |b| b.iter(|| european::call_price(black_box(&f))));
    group.bench_function("european_put_price", |b| b.iter(|| european::put_price(black_box(&f))));
    group.bench_function("european_gamma", |b| b.iter(|| european::gamma(black_box(&f))));
    group.bench_function("perpetual_put_price", |b| {
        b.iter(|| perpetual_american::put_price(black_box(&f)))
    });

    group.finish();
}

/// Benchmark closed-form delta against its finite-difference estimate.
fn bench_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta");
    let option = EuropeanOption::from_factors(factors(), OptionType::Call).unwrap();

    group.bench_function("closed_form", |b| b.iter(|| black_box(&option).delta()));
    group.bench_function("central_difference", |b| {
        b.iter(|| black_box(&option).approx_delta(black_box(1e-4)).unwrap())
    });

    group.finish();
}

/// Benchmark price sweeps over volatility.
fn bench_price_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_sweep");
    let option = EuropeanOption::from_factors(factors(), OptionType::Put).unwrap();

    for points in [10usize, 100, 1000] {
        let step = 0.8 / points as f64;
        group.bench_with_input(BenchmarkId::new("sig", points), &step, |b, &step| {
            b.iter(|| option.price_sweep("SIG", 0.1, 0.9, black_box(step)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernels, bench_delta, bench_price_sweep);
criterion_main!(benches);
