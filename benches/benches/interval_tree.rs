// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_interval::{Interval, IntervalTree};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_sorted_i64(count: usize, width: i64) -> Vec<Interval<i64>> {
    (0..count as i64)
        .map(|i| Interval::new(i * width, i * width + width))
        .collect()
}

fn gen_random_f64(count: usize, extent: f64, max_len: f64) -> Vec<Interval<f64>> {
    let mut rng = Rng::new(0x9e37_79b9_7f4a_7c15);
    (0..count)
        .map(|_| {
            let low = rng.next_f64() * extent;
            Interval::new(low, low + rng.next_f64() * max_len)
        })
        .collect()
}

// Sorted disjoint input grows a spine about n / 2 levels deep, so each insert
// walks the whole spine; keep sizes modest.
fn bench_insert_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_sorted_i64");
    for &n in &[500_usize, 2_000] {
        let segments = gen_sorted_i64(n, 4);
        group.throughput(Throughput::Elements(n as u64));
        for &cap in &[3_usize, 8, 32] {
            group.bench_function(format!("n{n}_cap{cap}"), |b| {
                b.iter_batched(
                    || IntervalTree::<i64>::with_max_leaf_size(cap).unwrap(),
                    |mut tree| {
                        for s in segments.iter().copied() {
                            tree.insert(s).unwrap();
                        }
                        black_box(tree.len());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random_f64");
    let n = 10_000;
    let segments = gen_random_f64(n, 1_000_000.0, 500.0);
    group.throughput(Throughput::Elements(n as u64));
    for &cap in &[3_usize, 8, 32] {
        group.bench_function(format!("cap{cap}"), |b| {
            b.iter_batched(
                || IntervalTree::<f64>::with_max_leaf_size(cap).unwrap(),
                |mut tree| {
                    for s in segments.iter().copied() {
                        tree.insert(s).unwrap();
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_f64");
    let segments = gen_random_f64(10_000, 1_000_000.0, 500.0);
    let mut tree = IntervalTree::<f64>::with_max_leaf_size(8).unwrap();
    for s in segments {
        tree.insert(s).unwrap();
    }
    group.throughput(Throughput::Elements(tree.node_count() as u64));
    group.bench_function("preorder_nodes", |b| {
        b.iter(|| black_box(tree.walk().count()));
    });
    group.bench_function("all_intervals", |b| {
        b.iter(|| black_box(tree.intervals().count()));
    });
    group.finish();
}

criterion_group!(benches, bench_insert_sorted, bench_insert_random, bench_walk);
criterion_main!(benches);
