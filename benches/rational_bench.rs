//! Benchmarks for canonical rational arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rationals::prelude::*;

/// Generates small rationals with varied denominators.
fn sample_rationals(count: usize) -> Vec<Rational> {
    (0..count)
        .map(|i| {
            let i = i64::try_from(i).unwrap_or(0);
            Rational::new((i % 97) - 48, (i % 13) + 1).unwrap()
        })
        .collect()
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let a = Rational::new(355, 113).unwrap();
    let b = Rational::new(-22, 7).unwrap();

    group.bench_function("add", |bench| bench.iter(|| black_box(a) + black_box(b)));
    group.bench_function("mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("div", |bench| bench.iter(|| black_box(a) / black_box(b)));
    group.bench_function("cmp", |bench| bench.iter(|| black_box(a) < black_box(b)));

    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for size in [16, 64, 256] {
        let values = sample_rationals(size);
        group.bench_with_input(BenchmarkId::new("try_add", size), &size, |bench, _| {
            bench.iter(|| {
                values
                    .iter()
                    .try_fold(Rational::ZERO, |acc, x| acc.try_add(*x))
            });
        });
    }

    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    group.bench_function("from_f64", |bench| {
        bench.iter(|| Rational::from_f64(black_box(0.0248)));
    });
    group.bench_function("parse", |bench| {
        bench.iter(|| black_box("-1416483/500").parse::<Rational>());
    });
    group.bench_function("display", |bench| {
        let x = Rational::new(-1_416_483, 500).unwrap();
        bench.iter(|| black_box(x).to_string());
    });

    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_sum, bench_conversions);

criterion_main!(benches);
