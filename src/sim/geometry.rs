//! Points, segments and the segment-segment intersection solver
//!
//! Pure math with no state. Everything downstream (brick edges, swept ball
//! motion) is expressed as a [`Segment`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A position in world space (y grows downward)
pub type Point = Vec2;

/// An ordered pair of points. Direction does not matter for intersection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// True if both endpoints have finite coordinates
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Find where two segments cross.
///
/// Uses the determinant form of the line-line intersection. The crossing is
/// reported only when its parametric position lies in `[0, 1]` on both
/// segments, so touching endpoints count as a hit.
///
/// Parallel and collinear segments return `None` even when they overlap, as do
/// zero-length or non-finite segments.
pub fn get_intersection(a: Segment, b: Segment) -> Option<Point> {
    if !a.is_finite() || !b.is_finite() {
        return None;
    }

    let da = a.direction();
    let db = b.direction();

    // cross(db, da); zero when parallel, collinear or degenerate
    let denom = db.x * (-da.y) - (-da.x) * db.y;
    if denom == 0.0 {
        return None;
    }

    let offset = a.start - b.start;
    let ta = ((-db.y) * offset.x + db.x * offset.y) / denom;
    let tb = ((-da.y) * offset.x + da.x * offset.y) / denom;

    // NaN fails both range checks
    if (0.0..=1.0).contains(&ta) && (0.0..=1.0).contains(&tb) {
        Some(a.start + da * ta)
    } else {
        None
    }
}
