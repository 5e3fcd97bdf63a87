// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Core `RankMap` operation benchmarks.
//!
//! Grounds the complexity claims in the crate-level docs: insertion, lookup,
//! rank query, and ordered traversal should stay logarithmic (or linear, for
//! a full traversal) regardless of insertion order, unlike a sorted `Vec`
//! baseline which degrades to quadratic insertion under an adversarial order.
//!
//! ## Performance Targets
//! - insert (adversarial order): no worse than ~2x insert (ascending order) at N = 10_000
//! - rank query / lookup: sub-millisecond at N = 10_000
//! - full traversal: linear in N, dominated by the leaf-thread walk

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rankmap::RankMap;

/// A small, deterministic splitmix64-style generator, seeded explicitly so
/// benchmark runs are reproducible across machines.
struct SplitMix64(u64);

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

fn adversarial_keys(n: usize) -> Vec<i64> {
    let mut rng = SplitMix64::new(42);
    let mut keys: Vec<i64> = (0..n as i64).collect();
    // Fisher-Yates shuffle.
    for i in (1..keys.len()).rev() {
        let j = (rng.next() as usize) % (i + 1);
        keys.swap(i, j);
    }
    keys
}

fn ascending_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [1_000, 10_000, 50_000].iter() {
        group.bench_with_input(BenchmarkId::new("ascending", size), size, |b, &n| {
            b.iter_batched(
                || ascending_keys(n),
                |keys| {
                    let mut map: RankMap<i64, i64> = RankMap::new();
                    for k in keys {
                        black_box(map.add(k, k).unwrap());
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("adversarial", size), size, |b, &n| {
            b.iter_batched(
                || adversarial_keys(n),
                |keys| {
                    let mut map: RankMap<i64, i64> = RankMap::new();
                    for k in keys {
                        black_box(map.add(k, k).unwrap());
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("sorted_vec_baseline", size), size, |b, &n| {
            b.iter_batched(
                || adversarial_keys(n),
                |keys| {
                    let mut vec: Vec<(i64, i64)> = Vec::new();
                    for k in keys {
                        let pos = vec.partition_point(|(existing, _)| *existing < k);
                        vec.insert(pos, (k, k));
                    }
                    black_box(vec)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1_000, 10_000, 50_000].iter() {
        let keys = adversarial_keys(*size);
        let mut map: RankMap<i64, i64> = RankMap::new();
        for &k in &keys {
            map.add(k, k).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                for k in keys.iter().step_by(97) {
                    black_box(map.try_get(k));
                }
            });
        });
    }

    group.finish();
}

fn bench_rank_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_of");

    for size in [1_000, 10_000, 50_000].iter() {
        let keys = adversarial_keys(*size);
        let mut map: RankMap<i64, i64> = RankMap::new();
        for &k in &keys {
            map.add(k, k).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                for k in keys.iter().step_by(97) {
                    black_box(map.index_of(k));
                }
            });
        });
    }

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [1_000, 10_000, 50_000].iter() {
        let keys = adversarial_keys(*size);
        let mut map: RankMap<i64, i64> = RankMap::new();
        for &k in &keys {
            map.add(k, k).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                for pair in map.iter() {
                    black_box(pair);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_lookup,
    bench_rank_query,
    bench_traversal
);
criterion_main!(benches);
