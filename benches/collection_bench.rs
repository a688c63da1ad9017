//! Benchmark for Collection vs standard Vec iterator chains.
//!
//! Compares the cost of the copy-on-construct operations of funcollect's
//! Collection against the equivalent `Vec` iterator pipelines.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funcollect::collection::Collection;
use std::hint::black_box;

// =============================================================================
// map + filter Benchmark
// =============================================================================

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    for size in [100, 1000, 10000] {
        let elements: Vec<i64> = (0..size).collect();
        let collection = Collection::new(&elements);

        group.bench_with_input(
            BenchmarkId::new("Collection", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| {
                    black_box(
                        collection
                            .map(|element| element * 3)
                            .filter(|element| element % 2 == 0),
                    )
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &elements, |bencher, elements| {
            bencher.iter(|| {
                let result: Vec<i64> = elements
                    .iter()
                    .map(|element| element * 3)
                    .filter(|element| element % 2 == 0)
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// distinct Benchmark
// =============================================================================

fn benchmark_distinct(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("distinct");

    for size in [100, 1000] {
        let collection: Collection<i64> = (0..size).map(|index| index % 37).collect();

        group.bench_with_input(
            BenchmarkId::new("Collection", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| black_box(collection.distinct()));
            },
        );
    }

    group.finish();
}

// =============================================================================
// replace Benchmark
// =============================================================================

fn benchmark_replace(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("replace");
    let targets: Vec<i64> = (0..16).collect();

    for size in [100, 1000, 10000] {
        let collection: Collection<i64> = (0..size).rev().collect();

        group.bench_with_input(
            BenchmarkId::new("replace", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| black_box(collection.replace(black_box(&targets), -1)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("replace_all", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| black_box(collection.replace_all(black_box(&targets), -1)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_filter,
    benchmark_distinct,
    benchmark_replace
);
criterion_main!(benches);
