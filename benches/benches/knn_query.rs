// Copyright 2026 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grove_points::{PointFlags, PointSet};
use grove_rstar::RStarTree;
use kurbo::Point;

fn gen_grid_points(n: usize, cell: f64) -> Vec<[f64; 2]> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push([x as f64 * cell, y as f64 * cell]);
        }
    }
    out
}

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

fn gen_random_points(count: usize, extent: f64, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| [rng.next_f64() * extent, rng.next_f64() * extent])
        .collect()
}

fn build_tree<const N: usize>(points: &[[f64; 2]]) -> RStarTree<u32, 2, N, N> {
    let mut tree = RStarTree::new();
    for (i, p) in points.iter().copied().enumerate() {
        tree.insert(p, i as u32);
    }
    tree
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("grid_fanout8_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| black_box(build_tree::<8>(&points)),
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("grid_fanout16_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| black_box(build_tree::<16>(&points)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("knn_query");
    for &count in &[4096usize, 16384] {
        let points = gen_random_points(count, 1000.0, 0x9e3779b97f4a7c15);
        let tree = build_tree::<8>(&points);
        let mut queries = Rng::new(7);
        let query_points: Vec<[f64; 2]> = (0..256)
            .map(|_| [queries.next_f64() * 1000.0, queries.next_f64() * 1000.0])
            .collect();
        group.throughput(Throughput::Elements(query_points.len() as u64));

        for &k in &[1usize, 8, 64] {
            group.bench_function(format!("random_c{}_k{}", count, k), |b| {
                b.iter(|| {
                    let mut hits = 0;
                    for q in &query_points {
                        hits += tree.query(*q, k, [1.0, 1.0]).len();
                    }
                    black_box(hits);
                })
            });
        }

        group.bench_function(format!("random_c{}_k8_filtered", count), |b| {
            b.iter(|| {
                let mut hits = 0;
                for q in &query_points {
                    hits += tree
                        .query_with_filter(*q, 8, |v| v % 2 == 0, [1.0, 1.0])
                        .len();
                }
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap");
    let points = gen_random_points(16384, 1000.0, 0xfeedface);
    let mut set = PointSet::new();
    for (i, p) in points.iter().enumerate() {
        let flags = if i % 4 == 0 {
            PointFlags::SNAPPABLE | PointFlags::ANCHOR
        } else {
            PointFlags::default()
        };
        set.insert(Point::new(p[0], p[1]), flags, i as u32);
    }
    let mut rng = Rng::new(11);
    let query_points: Vec<Point> = (0..256)
        .map(|_| Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 1000.0))
        .collect();
    group.throughput(Throughput::Elements(query_points.len() as u64));

    group.bench_function("nearest_k4", |b| {
        b.iter(|| {
            let mut hits = 0;
            for q in &query_points {
                hits += set.nearest(*q, 4).len();
            }
            black_box(hits);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_query, bench_snap);
criterion_main!(benches);

