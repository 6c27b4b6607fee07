// Copyright 2026 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The snap-point set: insertion and nearest queries over the R*-tree.

use alloc::vec::Vec;
use grove_rstar::RStarTree;
use kurbo::{Point, Vec2};

use crate::types::{PointFlags, Snap, SnapFilter};

const FANOUT: usize = 8;

#[derive(Clone, Debug)]
struct SnapItem<P> {
    point: Point,
    flags: PointFlags,
    payload: P,
}

/// An insert-only set of classified 2D points supporting k-nearest snap
/// queries.
///
/// Rebuild the set when the document changes; there is no removal.
pub struct PointSet<P> {
    tree: RStarTree<SnapItem<P>, 2, FANOUT, FANOUT>,
}

impl<P> Default for PointSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> core::fmt::Debug for PointSet<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointSet")
            .field("len", &self.tree.len())
            .finish_non_exhaustive()
    }
}

impl<P> PointSet<P> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            tree: RStarTree::new(),
        }
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Add a point with its classification flags and payload.
    ///
    /// Coordinates must be finite. Duplicate points are stored as distinct
    /// entries.
    pub fn insert(&mut self, point: Point, flags: PointFlags, payload: P) {
        self.tree.insert(
            [point.x, point.y],
            SnapItem {
                point,
                flags,
                payload,
            },
        );
    }
}

impl<P: Clone> PointSet<P> {
    /// The `k` snappable points nearest to `at`, ascending by squared
    /// distance.
    pub fn nearest(&self, at: Point, k: usize) -> Vec<Snap<P>> {
        self.query(at, k, Vec2::new(1.0, 1.0), SnapFilter::default())
    }

    /// Like [`nearest`](Self::nearest), restricted to points carrying all
    /// of `filter.require`.
    pub fn nearest_filtered(&self, at: Point, k: usize, filter: SnapFilter) -> Vec<Snap<P>> {
        self.query(at, k, Vec2::new(1.0, 1.0), filter)
    }

    /// Nearest query under an anisotropic metric: each axis's distance
    /// contribution is multiplied by the matching `scale` component before
    /// squaring. A larger component penalizes that axis, biasing snaps
    /// toward candidates aligned along the other one.
    pub fn nearest_scaled(&self, at: Point, k: usize, scale: Vec2) -> Vec<Snap<P>> {
        self.query(at, k, scale, SnapFilter::default())
    }

    fn query(&self, at: Point, k: usize, scale: Vec2, filter: SnapFilter) -> Vec<Snap<P>> {
        let items = self.tree.query_with_filter(
            [at.x, at.y],
            k,
            |item| item.flags.contains(filter.require),
            [scale.x, scale.y],
        );
        items
            .into_iter()
            .map(|item| {
                let dx = scale.x * (at.x - item.point.x);
                let dy = scale.y * (at.y - item.point.y);
                Snap {
                    point: item.point,
                    dist_sq: dx * dx + dy * dy,
                    payload: item.payload,
                }
            })
            .collect()
    }
}
