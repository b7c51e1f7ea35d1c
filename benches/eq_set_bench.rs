//! EqSet benchmarks.
//!
//! Compares EqSet against a plain `Vec` with linear-scan deduplication, which
//! is the usual alternative for elements that are neither hashable nor
//! ordered. Both are quadratic to build; the interesting numbers are the
//! constant factors and the cost of persistence.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use eqset::persistent::EqSet;
use std::hint::black_box;

const SIZES: [i32; 3] = [10, 100, 1000];

fn generate_elements(size: i32) -> Vec<i32> {
    (0..size).map(|index| (index * 7919) % (size * 2)).collect()
}

fn vec_dedup_by_scan(elements: Vec<i32>) -> Vec<i32> {
    let mut result = Vec::with_capacity(elements.len());
    for element in elements {
        if !result.contains(&element) {
            result.push(element);
        }
    }
    result
}

fn benchmark_collect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collect");

    for size in SIZES {
        let base_vec = generate_elements(size);

        group.bench_with_input(BenchmarkId::new("EqSet", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| black_box(elements.into_iter().collect::<EqSet<i32>>()),
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("Vec scan", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| black_box(vec_dedup_by_scan(elements)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in SIZES {
        let elements = generate_elements(size);
        let set: EqSet<i32> = elements.iter().copied().collect();
        let vector = vec_dedup_by_scan(elements);

        group.bench_with_input(BenchmarkId::new("EqSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0;
                for probe in 0..size {
                    if set.contains(black_box(&probe)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec scan", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0;
                for probe in 0..size {
                    if vector.contains(black_box(&probe)) {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

fn benchmark_union(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("union");

    for size in SIZES {
        let left: EqSet<i32> = (0..size).collect();
        let right: EqSet<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("EqSet", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.union(black_box(&right))));
        });
    }

    group.finish();
}

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in SIZES {
        let set: EqSet<i32> = (0..size).collect();
        let middle = size / 2;

        group.bench_with_input(BenchmarkId::new("EqSet", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.remove(black_box(&middle))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_collect,
    benchmark_contains,
    benchmark_union,
    benchmark_remove
);

criterion_main!(benches);
