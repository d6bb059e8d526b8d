//! Rect: The drawn region and container bounds primitive.

/// A rectangle defined by its top-left corner and size, in pixels.
///
/// Rectangles produced by a drag always have non-negative `width` and
/// `height`. `right` and `bottom` are exclusive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Y coordinate of the top edge.
    pub top: i32,
    /// X coordinate of the left edge.
    pub left: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(top: i32, left: i32, width: i32, height: i32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Check if this rectangle overlaps another.
    ///
    /// Rectangles that only share an edge do not overlap, so blocks drawn
    /// directly next to each other are allowed.
    #[inline]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !(self.right() <= other.left
            || self.left >= other.right()
            || self.top >= other.bottom()
            || self.bottom() <= other.top)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect(top {}, left {} {}x{})",
            self.top, self.left, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 50);
        assert_eq!(r.bottom(), 50);
        assert!(!r.is_empty());
        assert!(Rect::new(0, 0, 0, 5).is_empty());
    }

    #[test]
    fn test_overlaps_inner() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(10, 10, 5, 5);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let right_neighbour = Rect::new(0, 10, 10, 10);
        let below_neighbour = Rect::new(10, 0, 10, 10);
        assert!(!a.overlaps(&right_neighbour));
        assert!(!a.overlaps(&below_neighbour));
        assert!(!right_neighbour.overlaps(&a));
    }

    #[test]
    fn test_one_pixel_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(9, 9, 10, 10);
        assert!(a.overlaps(&b));
    }
}
