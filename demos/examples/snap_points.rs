// Copyright 2026 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap-point set basics.
//!
//! Build a snap set for a small scene, then query it the way an editor
//! would while the pointer moves.
//!
//! Run:
//! - `cargo run -p grove_demos --example snap_points`

use grove_points::{PointFlags, PointSet, SnapFilter};
use kurbo::{Point, Vec2};

fn main() {
    let mut set = PointSet::new();

    // A rectangle's corners and edge midpoints.
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 60.0),
        Point::new(0.0, 60.0),
    ];
    for (i, c) in corners.iter().enumerate() {
        set.insert(*c, PointFlags::SNAPPABLE | PointFlags::ANCHOR, format!("corner {i}"));
    }
    for (i, (a, b)) in [(0, 1), (1, 2), (2, 3), (3, 0)].into_iter().enumerate() {
        let mid = corners[a].midpoint(corners[b]);
        set.insert(mid, PointFlags::SNAPPABLE | PointFlags::MIDPOINT, format!("mid {i}"));
    }

    // The pointer hovers near the top edge.
    let pointer = Point::new(47.0, 2.5);
    for snap in set.nearest(pointer, 2) {
        println!("candidate {:?} at {:?} (d² = {:.2})", snap.payload, snap.point, snap.dist_sq);
    }

    // Anchor-only snapping ignores the nearby midpoint.
    let anchors = SnapFilter {
        require: PointFlags::ANCHOR,
    };
    let hit = &set.nearest_filtered(pointer, 1, anchors)[0];
    println!("anchor snap: {:?} at {:?}", hit.payload, hit.point);

    // Bias vertical alignment: x offsets cost 4x more.
    let hit = &set.nearest_scaled(pointer, 1, Vec2::new(4.0, 1.0))[0];
    println!("column-biased snap: {:?} at {:?}", hit.payload, hit.point);
}
