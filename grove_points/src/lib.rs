// Copyright 2026 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Points: a Kurbo-native 2D snap-point set.
//!
//! Grove Points is a reusable building block for canvas and vector editors,
//! CAD viewers, and node graphs: anywhere pointer input should gravitate
//! toward nearby geometry.
//!
//! - Collect classified 2D points (anchors, midpoints, grid intersections)
//!   with user payloads.
//! - Query the `k` nearest snap candidates, optionally restricted by
//!   classification flags.
//! - Bias the metric per axis for anisotropic snapping (for example,
//!   stronger column alignment than row alignment).
//!
//! The set is insert-only: snap candidates are derived data, and
//! rebuilding the set on document change is both simpler and cheaper than
//! keeping an editable index coherent. Spatial acceleration comes from
//! [`grove_rstar`], the workspace's R*-tree.
//!
//! ## API overview
//!
//! - [`PointSet`]: the set itself; [`PointSet::insert`] and the
//!   `nearest*` queries.
//! - [`PointFlags`]: classification bits; points without
//!   [`PointFlags::SNAPPABLE`] are invisible to default queries.
//! - [`SnapFilter`]: flag requirements for a query.
//! - [`Snap`]: one query result (point, squared distance, payload).
//!
//! # Example
//!
//! ```rust
//! use grove_points::{PointFlags, PointSet, SnapFilter};
//! use kurbo::Point;
//!
//! let mut set = PointSet::new();
//! set.insert(Point::new(0.0, 0.0), PointFlags::SNAPPABLE | PointFlags::ANCHOR, "start");
//! set.insert(Point::new(5.0, 0.0), PointFlags::SNAPPABLE | PointFlags::MIDPOINT, "mid");
//! set.insert(Point::new(10.0, 0.0), PointFlags::SNAPPABLE | PointFlags::ANCHOR, "end");
//!
//! // The pointer hovers near the midpoint.
//! let hit = &set.nearest(Point::new(5.4, 0.2), 1)[0];
//! assert_eq!(hit.payload, "mid");
//!
//! // Restrict snapping to anchors.
//! let filter = SnapFilter { require: PointFlags::ANCHOR };
//! let hit = &set.nearest_filtered(Point::new(5.4, 0.2), 1, filter)[0];
//! assert_eq!(hit.payload, "end");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod set;
mod types;

pub use set::PointSet;
pub use types::{PointFlags, Snap, SnapFilter};
