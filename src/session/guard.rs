//! Resize guard: lets the caller veto a proposed frame.

use crate::geometry::Rect;

/// Decides whether a proposed rectangle may replace the current one.
///
/// Called once per update with the rectangle currently shown and the
/// rectangle the pointer movement would produce. Returning `false` keeps the
/// current rectangle for that frame.
pub trait ResizeGuard {
    /// Check whether the proposed dimensions are acceptable.
    fn allow_resize(&mut self, current: &Rect, proposed: &Rect) -> bool;
}

/// Guard that accepts every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl ResizeGuard for AllowAll {
    #[inline]
    fn allow_resize(&mut self, _current: &Rect, _proposed: &Rect) -> bool {
        true
    }
}

/// Guard that rejects frames overlapping any of a set of obstacles.
#[derive(Debug, Clone, Copy)]
pub struct AvoidObstacles<'a> {
    obstacles: &'a [Rect],
}

impl<'a> AvoidObstacles<'a> {
    /// Create a guard over the given obstacles.
    pub const fn new(obstacles: &'a [Rect]) -> Self {
        Self { obstacles }
    }
}

impl ResizeGuard for AvoidObstacles<'_> {
    fn allow_resize(&mut self, _current: &Rect, proposed: &Rect) -> bool {
        !crate::geometry::any_overlap(proposed, self.obstacles)
    }
}

impl<F> ResizeGuard for F
where
    F: FnMut(&Rect, &Rect) -> bool,
{
    fn allow_resize(&mut self, current: &Rect, proposed: &Rect) -> bool {
        self(current, proposed)
    }
}
