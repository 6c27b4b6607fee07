// Copyright 2026 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! R*-tree basics.
//!
//! Build a small 2D index, query nearest neighbors, and filter payloads.
//!
//! Run:
//! - `cargo run -p grove_demos --example rstar_basics`

use grove_rstar::RStarTree;

fn main() {
    // Index a handful of labeled sites.
    let mut tree: RStarTree<&'static str, 2, 8, 8> = RStarTree::new();
    for (pos, name) in [
        ([2.0, 3.0], "library"),
        ([5.0, 1.0], "cafe"),
        ([6.0, 7.0], "park"),
        ([8.0, 2.0], "station"),
        ([1.0, 8.0], "museum"),
        ([9.0, 9.0], "harbor"),
    ] {
        tree.insert(pos, name);
    }

    // Three nearest sites to a visitor at (4, 4).
    let here = [4.0, 4.0];
    let nearest = tree.query(here, 3, [1.0, 1.0]);
    println!("nearest three: {:?}", nearest);

    // Same query, restricted to longer names.
    let long_names = tree.query_with_filter(here, 3, |name| name.len() > 4, [1.0, 1.0]);
    println!("nearest with long names: {:?}", long_names);

    // Distances in x cost 5x as much (e.g. the east-west ferry is slow).
    let biased = tree.query(here, 3, [5.0, 1.0]);
    println!("with east-west penalty: {:?}", biased);
}
