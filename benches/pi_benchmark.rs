// ============================================================================
// Pi Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Planning - Precision planning cost across digit counts
// 2. Constant - Generation of C = 426880 * sqrt(10005)
// 3. Strategy Comparison - Term recurrence vs binary splitting end to end
// ============================================================================

use chudnovsky_pi::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

const DIGIT_COUNTS: [u64; 4] = [50, 500, 2_000, 10_000];

// ============================================================================
// Planning Benchmarks
// ============================================================================

fn benchmark_planner(c: &mut Criterion) {
    let mut group = c.benchmark_group("planner");
    let planner = PrecisionPlanner::default();

    for digits in DIGIT_COUNTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(digits), digits, |b, &digits| {
            b.iter(|| black_box(planner.plan(black_box(digits))));
        });
    }

    group.finish();
}

// ============================================================================
// Constant Generation Benchmarks
// ============================================================================

fn benchmark_constant(c: &mut Criterion) {
    let mut group = c.benchmark_group("constant");

    for bits in [256u64, 4_096, 65_536].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(bits), bits, |b, &bits| {
            b.iter(|| black_box(ConstantGenerator::generate(black_box(bits))));
        });
    }

    group.finish();
}

// ============================================================================
// Strategy Comparison Benchmarks
// Full pipeline through the engine for each summation strategy
// ============================================================================

fn benchmark_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy_comparison");
    group.sample_size(20);

    let strategies = [
        ("TermRecurrence", SummationType::TermRecurrence),
        ("BinarySplitting", SummationType::BinarySplitting),
    ];

    for (name, summation) in strategies.iter() {
        let engine = PiEngineBuilder::new()
            .summation(*summation)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        for digits in DIGIT_COUNTS.iter() {
            group.bench_with_input(BenchmarkId::new(*name, digits), digits, |b, &digits| {
                b.iter(|| black_box(engine.compute(black_box(digits))));
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_planner,
    benchmark_constant,
    benchmark_strategies,
);

criterion_main!(benches);
