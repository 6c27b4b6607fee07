// Copyright 2026 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove R*: an in-memory R*-tree point index with k-nearest-neighbor search.
//!
//! Grove R* is a reusable building block for proximity queries over point data.
//!
//! - Insert points in a fixed `D`-dimensional space, each with a user payload.
//! - Query the `k` nearest payloads, ascending by distance, with an optional
//!   payload filter and per-axis distance scaling.
//! - Node capacities are compile-time parameters; the tree stays
//!   height-balanced through R* overflow splits and root promotion.
//!
//! Splits follow the R* heuristic: candidate axis/position pairs are ranked
//! lexicographically by the overlap volume of the two halves, then their
//! total margin, then their total area, with a minimum per-side fill of
//! `max(⌊0.25 · N⌋, 1)` entries. Queries run a best-first descent, visiting
//! children in ascending distance to their bounding regions and cutting the
//! descent off once the region distance exceeds the current k-th best
//! candidate.
//!
//! # Example
//!
//! ```rust
//! use grove_rstar::RStarTree;
//!
//! // A 2D tree with fanout 8 at internal nodes and leaves.
//! let mut tree: RStarTree<u32, 2, 8, 8> = RStarTree::new();
//! tree.insert([0.0, 0.0], 1);
//! tree.insert([10.0, 0.0], 2);
//! tree.insert([0.0, 10.0], 3);
//!
//! let nearest = tree.query([2.0, 1.0], 2, [1.0, 1.0]);
//! assert_eq!(nearest, vec![1, 2]);
//! ```
//!
//! Filters restrict results to matching payloads, and the scale parameter
//! reweights axes (useful when coordinates mix units):
//!
//! ```rust
//! use grove_rstar::RStarTree;
//!
//! let mut tree: RStarTree<u32, 2, 8, 8> = RStarTree::new();
//! for i in 0..20u32 {
//!     tree.insert([i as f64, (i % 5) as f64], i);
//! }
//!
//! let evens = tree.query_with_filter([3.0, 1.0], 3, |v| v % 2 == 0, [1.0, 1.0]);
//! assert!(evens.iter().all(|v| v % 2 == 0));
//!
//! // Weight the y axis 10x: candidates on the same row win.
//! let row = tree.query([3.0, 3.0], 2, [1.0, 10.0]);
//! assert_eq!(row, vec![3, 8]);
//! ```
//!
//! ## Choosing capacities
//!
//! `N` (internal fanout) and `L` (leaf fanout) trade depth against per-node
//! scan cost; 8 is a reasonable default for both. Construction rejects
//! `D = 0`, capacities below 2, and leaf capacities too small to satisfy
//! the minimum split fill, at compile time for each instantiation.
//!
//! ### Float semantics
//!
//! Coordinates and scale factors must be finite; `insert` and `query`
//! assert this. Distances are compared as raw `f64` squared magnitudes --
//! no NaN can arise from finite inputs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod knn;
mod node;
mod split;
mod tree;
pub mod types;

pub use split::MIN_SPLIT;
pub use tree::{Iter, RStarTree};
pub use types::Region;
