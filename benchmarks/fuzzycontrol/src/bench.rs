//! Fuzzy matrix and fuzzification benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Max-min and max-product composition (square relations, 16 to 256)
//! - Transposition
//! - Fuzzification throughput (1K to 100K readings)
//! - Defuzzification methods
//!
//! For parallel fuzzification, use `cargo bench --features parallel`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fuzzycontrol::internals::algorithms::fuzzification::fuzzify;
use fuzzycontrol::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a `rows x cols` relation with degrees uniform on `[0, 1)`.
fn generate_relation(rows: usize, cols: usize, seed: u64) -> FuzzyMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(0.0, 1.0).unwrap();

    let data = (0..rows * cols).map(|_| dist.sample(&mut rng)).collect();
    FuzzyMatrix::from_vec(rows, cols, data).unwrap()
}

/// Generate temperature readings around 20 degrees.
fn generate_readings(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(20.0, 8.0).unwrap();

    (0..size).map(|_| noise_dist.sample(&mut rng)).collect()
}

/// Seven overlapping triangles covering `[-10, 50]`.
fn temperature_sets() -> Vec<LabeledMembership<f64>> {
    const LABELS: [&str; 7] = ["freezing", "cold", "cool", "mild", "warm", "hot", "scorching"];

    LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let center = -10.0 + 10.0 * i as f64;
            LabeledMembership::new(
                label,
                MembershipFunction::Triangular {
                    a: center - 10.0,
                    b: center,
                    c: center + 10.0,
                },
            )
        })
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");
    group.sample_size(50);

    for size in [16, 64, 256] {
        group.throughput(Throughput::Elements((size * size) as u64));

        let a = generate_relation(size, size, 42);
        let b = generate_relation(size, size, 43);

        for op in [CompositionOp::MaxMin, CompositionOp::MaxProd] {
            group.bench_with_input(BenchmarkId::new(op.name(), size), &size, |bench, _| {
                let mut result = FuzzyMatrix::new();
                bench.iter(|| {
                    compose_with(black_box(&a), black_box(&b), &mut result, op).unwrap();
                })
            });
        }
    }
    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    group.sample_size(100);

    for size in [64, 256, 1024] {
        group.throughput(Throughput::Elements((size * size) as u64));

        let m = generate_relation(size, size, 7);

        group.bench_with_input(BenchmarkId::new("square", size), &size, |bench, _| {
            let mut dst = FuzzyMatrix::new();
            bench.iter(|| transpose(black_box(&m), &mut dst).unwrap())
        });
    }
    group.finish();
}

fn bench_fuzzification(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzification");
    group.sample_size(50);

    let sets = temperature_sets();

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let readings = generate_readings(size, 42);

        group.bench_with_input(BenchmarkId::new("serial", size), &size, |bench, _| {
            bench.iter(|| fuzzify(black_box(&readings), &sets).unwrap())
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |bench, _| {
            use fuzzycontrol::internals::algorithms::fuzzification::fuzzify_parallel;
            bench.iter(|| fuzzify_parallel(black_box(&readings), &sets).unwrap())
        });
    }
    group.finish();
}

fn bench_defuzzification(c: &mut Criterion) {
    let mut group = c.benchmark_group("defuzzification");
    group.sample_size(100);

    let mut output = FcOutput::new();
    output.register("fan").unwrap();
    for set in temperature_sets() {
        output.add_membership_shape(set.function, &set.label).unwrap();
    }
    output
        .set_membership(generate_relation(100, 7, 11))
        .unwrap();
    let universe = Universe::new(-20.0, 60.0, 401).unwrap();

    for method in [Centroid, Bisector, MeanOfMaximum, SmallestOfMaximum, LargestOfMaximum] {
        group.bench_function(method.name(), |bench| {
            bench.iter(|| output.unfuzzing_with(black_box(&universe), method).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_composition,
    bench_transpose,
    bench_fuzzification,
    bench_defuzzification,
);
criterion_main!(benches);
