// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strict-interior hit testing for item rectangles.

use kurbo::{Point, Rect};

/// Returns `true` if `point` lies strictly inside `rect`.
///
/// All four comparisons are strict, so a point exactly on an edge is inside
/// neither of two adjacent, touching rectangles. This is what lets hover
/// detection over a packed item strip pick at most one candidate for a
/// boundary position. Note that [`Rect::contains`] is edge-inclusive on the
/// min edges and therefore not suitable here.
///
/// Degenerate (zero-area) rectangles contain no points.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_reorder::strictly_contains;
///
/// let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
/// assert!(strictly_contains(rect, Point::new(50.0, 50.0)));
/// assert!(!strictly_contains(rect, Point::new(0.0, 50.0)));
/// ```
#[must_use]
pub fn strictly_contains(rect: Rect, point: Point) -> bool {
    point.x > rect.x0 && point.x < rect.x1 && point.y > rect.y0 && point.y < rect.y1
}
