// Copyright 2026 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagged leaf/internal node variants, insertion, and search traversal.
//!
//! Nodes form a strict ownership tree: an internal node owns its children
//! through boxed entries and the tree owns the root. There are no parent
//! pointers; an overflow is reported to the caller as a [`Split`] carrying
//! the freshly allocated sibling, and each ancestor either absorbs it or
//! splits in turn.

use alloc::boxed::Box;
use alloc::collections::BinaryHeap;
use alloc::vec::Vec;

use crate::knn::{ChildCandidate, NearestSet};
use crate::split::{Entry, find_best_split, min_split_count, partition};
use crate::types::{Region, point_dist_sq, region_dist_sq};

/// Result of an insert that overflowed a node: the node itself was
/// rewritten as the lower half and `sibling` carries the upper half up to
/// the parent.
pub(crate) struct Split<S, const D: usize, const N: usize, const L: usize> {
    pub region: Region<D>,
    pub sibling: Box<Node<S, D, N, L>>,
}

/// A tree node: a leaf holding up to `L` values or an internal node holding
/// up to `N` children.
pub(crate) enum Node<S, const D: usize, const N: usize, const L: usize> {
    Internal(InternalNode<S, D, N, L>),
    Leaf(LeafNode<S, D, N, L>),
}

impl<S, const D: usize, const N: usize, const L: usize> Node<S, D, N, L> {
    /// Leaf created for the first insertion into an empty tree.
    pub(crate) fn first_leaf(key: [f64; D], value: S) -> Self {
        let region = Region::from_point(key);
        let mut entries = Vec::with_capacity(L);
        entries.push(Entry {
            region,
            payload: value,
        });
        Self::Leaf(LeafNode { region, entries })
    }

    pub(crate) fn region(&self) -> &Region<D> {
        match self {
            Self::Internal(node) => &node.region,
            Self::Leaf(node) => &node.region,
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Internal(node) => node.entries.len(),
            Self::Leaf(node) => node.entries.len(),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    pub(crate) fn is_full(&self) -> bool {
        match self {
            Self::Internal(node) => node.entries.len() == N,
            Self::Leaf(node) => node.entries.len() == L,
        }
    }

    pub(crate) fn insert(&mut self, key: [f64; D], value: S) -> Option<Split<S, D, N, L>> {
        match self {
            Self::Internal(node) => node.insert(key, value),
            Self::Leaf(node) => node.insert(key, value),
        }
    }

    pub(crate) fn search<F>(
        &self,
        key: &[f64; D],
        scale: &[f64; D],
        filter: &F,
        out: &mut NearestSet<S>,
    ) where
        S: Clone,
        F: Fn(&S) -> bool,
    {
        match self {
            Self::Internal(node) => node.search(key, scale, filter, out),
            Self::Leaf(node) => node.search(key, scale, filter, out),
        }
    }
}

/// Leaf node: entries pair a degenerate point region with a stored value.
pub(crate) struct LeafNode<S, const D: usize, const N: usize, const L: usize> {
    pub region: Region<D>,
    pub entries: Vec<Entry<S, D>>,
}

impl<S, const D: usize, const N: usize, const L: usize> LeafNode<S, D, N, L> {
    const MIN_FILL: usize = min_split_count(N);

    fn insert(&mut self, key: [f64; D], value: S) -> Option<Split<S, D, N, L>> {
        if self.entries.len() < L {
            self.region.expand_point(&key);
            self.entries.push(Entry {
                region: Region::from_point(key),
                payload: value,
            });
            return None;
        }

        // Overflow: split the L existing entries plus the incoming one.
        let mut working = core::mem::take(&mut self.entries);
        working.push(Entry {
            region: Region::from_point(key),
            payload: value,
        });
        let choice = find_best_split(&mut working, Self::MIN_FILL);
        let (lower, upper) = partition(working, &choice);

        self.region = lower.region;
        self.entries = lower.entries;
        let sibling = LeafNode {
            region: upper.region,
            entries: upper.entries,
        };
        Some(Split {
            region: sibling.region,
            sibling: Box::new(Node::Leaf(sibling)),
        })
    }

    fn search<F>(&self, key: &[f64; D], scale: &[f64; D], filter: &F, out: &mut NearestSet<S>)
    where
        S: Clone,
        F: Fn(&S) -> bool,
    {
        for entry in &self.entries {
            if !filter(&entry.payload) {
                continue;
            }
            // Leaf regions are degenerate, so `min` is the stored point.
            let dist_sq = point_dist_sq(key, &entry.region.min, scale);
            out.offer(dist_sq, &entry.payload);
        }
    }
}

/// Internal node: entries pair a covering region with an owned child.
pub(crate) struct InternalNode<S, const D: usize, const N: usize, const L: usize> {
    pub region: Region<D>,
    pub entries: Vec<Entry<Box<Node<S, D, N, L>>, D>>,
}

impl<S, const D: usize, const N: usize, const L: usize> InternalNode<S, D, N, L> {
    const MIN_FILL: usize = min_split_count(N);

    /// Root promoted over a split root: the old root and its new sibling.
    pub(crate) fn promoted_root(
        old_root: Box<Node<S, D, N, L>>,
        split: Split<S, D, N, L>,
    ) -> Self {
        let mut region = *old_root.region();
        region.expand_region(&split.region);
        let mut entries = Vec::with_capacity(N);
        entries.push(Entry {
            region: *old_root.region(),
            payload: old_root,
        });
        entries.push(Entry {
            region: split.region,
            payload: split.sibling,
        });
        Self { region, entries }
    }

    /// Child whose region needs the least area enlargement to absorb the
    /// key; ties prefer the smaller region, then insertion order.
    fn choose_subtree(&self, key_region: &Region<D>) -> usize {
        let mut best = 0;
        let mut best_enlargement = f64::INFINITY;
        let mut best_area = f64::INFINITY;

        for (i, entry) in self.entries.iter().enumerate() {
            let area = entry.region.area();
            let mut grown = entry.region;
            grown.expand_region(key_region);
            let enlargement = grown.area() - area;

            if enlargement < best_enlargement
                || (enlargement == best_enlargement && area < best_area)
            {
                best = i;
                best_enlargement = enlargement;
                best_area = area;
            }
        }
        best
    }

    fn insert(&mut self, key: [f64; D], value: S) -> Option<Split<S, D, N, L>> {
        let key_region = Region::from_point(key);
        let target = self.choose_subtree(&key_region);

        let Some(split) = self.entries[target].payload.insert(key, value) else {
            self.entries[target].region.expand_point(&key);
            self.region.expand_point(&key);
            return None;
        };

        // The target child rewrote itself as the lower half of its split;
        // refresh its cached subregion so stored regions stay exact.
        let lower_region = *self.entries[target].payload.region();
        self.entries[target].region = lower_region;

        if self.entries.len() < N {
            self.region.expand_region(&lower_region);
            self.region.expand_region(&split.region);
            self.entries.push(Entry {
                region: split.region,
                payload: split.sibling,
            });
            return None;
        }

        // Overflow: the child handles move into the working set and out
        // into whichever half each lands in; ownership stays exclusive.
        let mut working = core::mem::take(&mut self.entries);
        working.push(Entry {
            region: split.region,
            payload: split.sibling,
        });
        let choice = find_best_split(&mut working, Self::MIN_FILL);
        let (lower, upper) = partition(working, &choice);

        self.region = lower.region;
        self.entries = lower.entries;
        let sibling = InternalNode {
            region: upper.region,
            entries: upper.entries,
        };
        Some(Split {
            region: sibling.region,
            sibling: Box::new(Node::Internal(sibling)),
        })
    }

    /// Best-first descent: children pop in ascending region distance, and
    /// once the result set is full, a child farther than the current k-th
    /// best ends the descent (everything still queued is farther yet).
    fn search<F>(&self, key: &[f64; D], scale: &[f64; D], filter: &F, out: &mut NearestSet<S>)
    where
        S: Clone,
        F: Fn(&S) -> bool,
    {
        let mut queue = BinaryHeap::with_capacity(self.entries.len());
        for entry in &self.entries {
            queue.push(ChildCandidate {
                dist_sq: region_dist_sq(key, &entry.region, scale),
                node: &entry.payload,
            });
        }

        while let Some(candidate) = queue.pop() {
            if candidate.dist_sq > out.cutoff_dist_sq() {
                break;
            }
            candidate.node.search(key, scale, filter, out);
        }
    }
}
