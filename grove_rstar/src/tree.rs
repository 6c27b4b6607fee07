// Copyright 2026 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `RStarTree` API: insertion with root promotion, kNN queries,
//! and payload iteration.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::knn::NearestSet;
use crate::node::{InternalNode, Node};
use crate::split::{Entry, min_split_count};

/// An in-memory R*-tree over points in `D`-dimensional space.
///
/// `S` is the stored payload type. `N` is the internal-node capacity and
/// `L` the leaf capacity; both are compile-time parameters, checked at
/// construction. The tree supports incremental insertion and
/// k-nearest-neighbor queries with an optional payload filter and per-axis
/// distance scaling; see the crate docs for an overview and examples.
pub struct RStarTree<S, const D: usize, const N: usize, const L: usize> {
    root: Option<Box<Node<S, D, N, L>>>,
    len: usize,
}

impl<S, const D: usize, const N: usize, const L: usize> Default for RStarTree<S, D, N, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, const D: usize, const N: usize, const L: usize> core::fmt::Debug
    for RStarTree<S, D, N, L>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RStarTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl<S, const D: usize, const N: usize, const L: usize> RStarTree<S, D, N, L> {
    // Evaluated once per instantiation; rejects degenerate parameter sets,
    // including leaf capacities too small for the minimum split fill.
    const PARAMS_OK: () = assert!(
        D >= 1 && N >= 2 && L >= 2 && L + 1 >= 2 * min_split_count(N),
        "RStarTree requires D >= 1, N >= 2, L >= 2, and L + 1 >= 2 * min fill"
    );

    /// Create an empty tree.
    pub fn new() -> Self {
        let () = Self::PARAMS_OK;
        Self { root: None, len: 0 }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a point with its payload.
    ///
    /// Repeated inserts of the same key store repeated entries; there is no
    /// duplicate detection.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is non-finite.
    pub fn insert(&mut self, key: [f64; D], value: S) {
        assert!(
            key.iter().all(|c| c.is_finite()),
            "insert requires finite coordinates"
        );

        let Some(root) = self.root.as_mut() else {
            self.root = Some(Box::new(Node::first_leaf(key, value)));
            self.len = 1;
            return;
        };

        if let Some(split) = root.insert(key, value) {
            // Root split: promote a new internal root over the old root and
            // its sibling. This is the only operation that grows the height.
            let old_root = self.root.take().expect("root checked above");
            self.root = Some(Box::new(Node::Internal(InternalNode::promoted_root(
                old_root, split,
            ))));
        }
        self.len += 1;
    }

    /// The `max_k` payloads nearest to `key`, ascending by scaled squared
    /// Euclidean distance `Σ (scale[i] · (key[i] − point[i]))²`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate of `key` or `scale` is non-finite.
    pub fn query(&self, key: [f64; D], max_k: usize, scale: [f64; D]) -> Vec<S>
    where
        S: Clone,
    {
        self.query_with_filter(key, max_k, |_| true, scale)
    }

    /// Like [`query`](Self::query), restricted to payloads for which
    /// `filter` returns true.
    pub fn query_with_filter<F>(
        &self,
        key: [f64; D],
        max_k: usize,
        filter: F,
        scale: [f64; D],
    ) -> Vec<S>
    where
        S: Clone,
        F: Fn(&S) -> bool,
    {
        assert!(
            key.iter().all(|c| c.is_finite()),
            "query requires finite coordinates"
        );
        assert!(
            scale.iter().all(|c| c.is_finite()),
            "query requires finite scale factors"
        );

        let Some(root) = &self.root else {
            return Vec::new();
        };
        if max_k == 0 {
            return Vec::new();
        }

        let mut out = NearestSet::new(max_k);
        root.search(&key, &scale, &filter, &mut out);
        out.into_sorted_values()
    }

    /// Iterate over all stored payloads in unspecified order.
    pub fn iter(&self) -> Iter<'_, S, D, N, L> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            leaf: Default::default(),
        }
    }

    fn height(&self) -> usize {
        let mut height = 0;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            height += 1;
            node = match n {
                Node::Internal(internal) => {
                    Some(&*internal.entries.first().expect("internal node is non-empty").payload)
                }
                Node::Leaf(_) => None,
            };
        }
        height
    }
}

/// Borrowing iterator over a tree's payloads. Created by
/// [`RStarTree::iter`].
pub struct Iter<'a, S, const D: usize, const N: usize, const L: usize> {
    stack: Vec<&'a Node<S, D, N, L>>,
    leaf: core::slice::Iter<'a, Entry<S, D>>,
}

impl<'a, S, const D: usize, const N: usize, const L: usize> Iterator for Iter<'a, S, D, N, L> {
    type Item = &'a S;

    fn next(&mut self) -> Option<&'a S> {
        loop {
            if let Some(entry) = self.leaf.next() {
                return Some(&entry.payload);
            }
            match self.stack.pop()? {
                Node::Internal(internal) => {
                    self.stack
                        .extend(internal.entries.iter().map(|e| &*e.payload));
                }
                Node::Leaf(leaf) => self.leaf = leaf.entries.iter(),
            }
        }
    }
}
