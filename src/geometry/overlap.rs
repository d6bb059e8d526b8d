//! Overlap testing between the proxy rectangle and existing regions.

use super::rect::Rect;

/// Axis-aligned overlap test.
///
/// Two rectangles are disjoint when one lies entirely on one side of the
/// other. Touching edges count as disjoint.
#[inline]
pub const fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Index of the first obstacle the rectangle overlaps, if any.
pub fn first_overlap(rect: &Rect, obstacles: &[Rect]) -> Option<usize> {
    obstacles.iter().position(|obstacle| rect.overlaps(obstacle))
}

/// Check whether the rectangle overlaps any obstacle.
pub fn any_overlap(rect: &Rect, obstacles: &[Rect]) -> bool {
    first_overlap(rect, obstacles).is_some()
}
