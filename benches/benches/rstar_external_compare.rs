// Copyright 2026 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grove_rstar::RStarTree;

use rstar::RTree;

fn gen_grid_points(n: usize, cell: f64) -> Vec<[f64; 2]> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push([x as f64 * cell, y as f64 * cell]);
        }
    }
    out
}

fn bench_knn_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("knn_external_compare");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        let query = [321.0, 321.0];
        let k = 16;
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("grove_build_query_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let mut tree: RStarTree<u32, 2, 8, 8> = RStarTree::new();
                    for (i, p) in points.into_iter().enumerate() {
                        tree.insert(p, i as u32);
                    }
                    let hits = tree.query(query, k, [1.0, 1.0]).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let tree = RTree::bulk_load(points);
                    let hits = tree.nearest_neighbor_iter(&query).take(k).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knn_external_compare);
criterion_main!(benches);
