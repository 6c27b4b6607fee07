// Copyright 2026 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the snap-point set: flags, filters, and query results.

use kurbo::Point;

bitflags::bitflags! {
    /// Classification flags for a snap point.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointFlags: u8 {
        /// Point participates in snap queries at all.
        const SNAPPABLE = 0b0000_0001;
        /// Path or shape anchor.
        const ANCHOR    = 0b0000_0010;
        /// Segment midpoint.
        const MIDPOINT  = 0b0000_0100;
        /// Grid or guide intersection.
        const GRID      = 0b0000_1000;
    }
}

impl Default for PointFlags {
    fn default() -> Self {
        Self::SNAPPABLE
    }
}

/// Restricts snap queries to points carrying all required flags.
///
/// Used by [`PointSet::nearest_filtered`](crate::PointSet::nearest_filtered).
#[derive(Clone, Copy, Debug)]
pub struct SnapFilter {
    /// Flags a candidate must carry. The default requires
    /// [`PointFlags::SNAPPABLE`].
    pub require: PointFlags,
}

impl Default for SnapFilter {
    fn default() -> Self {
        Self {
            require: PointFlags::SNAPPABLE,
        }
    }
}

/// One result of a nearest query.
#[derive(Clone, Debug)]
pub struct Snap<P> {
    /// The matched point.
    pub point: Point,
    /// Squared distance from the query point, in the query's metric
    /// (scaled when the query supplied a scale).
    pub dist_sq: f64,
    /// The payload stored with the point.
    pub payload: P,
}
