//! Padding: The interior inset of a drawing container.

use super::rect::Rect;

/// Inset of the container within which rectangles may be drawn.
///
/// All four sides are non-negative; constructors clamp negative input to 0
/// and the sides are only reachable through getters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Padding {
    top: i32,
    right: i32,
    bottom: i32,
    left: i32,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self::uniform(0);

    /// Create padding from individual sides (CSS order).
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top: non_negative(top),
            right: non_negative(right),
            bottom: non_negative(bottom),
            left: non_negative(left),
        }
    }

    /// Same inset on every side.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Inset from the top edge.
    pub const fn top(&self) -> i32 {
        self.top
    }

    /// Inset from the right edge.
    pub const fn right(&self) -> i32 {
        self.right
    }

    /// Inset from the bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Inset from the left edge.
    pub const fn left(&self) -> i32 {
        self.left
    }

    /// The container's padded interior.
    ///
    /// Collapses to zero size when the padding exceeds the container.
    pub const fn interior(&self, container: &Rect) -> Rect {
        let width = container.width.saturating_sub(self.left).saturating_sub(self.right);
        let height = container.height.saturating_sub(self.top).saturating_sub(self.bottom);
        Rect::new(
            container.top.saturating_add(self.top),
            container.left.saturating_add(self.left),
            non_negative(width),
            non_negative(height),
        )
    }
}

const fn non_negative(value: i32) -> i32 {
    if value < 0 { 0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_sides_clamp_to_zero() {
        let padding = Padding::new(-4, 3, -1, 2);
        assert_eq!(padding.top(), 0);
        assert_eq!(padding.right(), 3);
        assert_eq!(padding.bottom(), 0);
        assert_eq!(padding.left(), 2);
        assert_eq!(Padding::uniform(-10), Padding::ZERO);
    }

    #[test]
    fn test_interior() {
        let container = Rect::new(100, 50, 400, 300);
        let interior = Padding::new(10, 20, 30, 40).interior(&container);
        assert_eq!(interior, Rect::new(110, 90, 340, 260));
    }

    #[test]
    fn test_interior_collapses() {
        let container = Rect::new(0, 0, 10, 10);
        let interior = Padding::uniform(8).interior(&container);
        assert_eq!(interior.width, 0);
        assert_eq!(interior.height, 0);
    }

    #[test]
    fn test_interior_saturates_at_extremes() {
        let container = Rect::new(i32::MAX - 5, i32::MIN, 100, i32::MAX);
        let interior = Padding::uniform(10).interior(&container);
        assert_eq!(interior.top, i32::MAX);
        assert_eq!(interior.left, i32::MIN + 10);
        assert_eq!(interior.bottom(), i32::MAX);
    }
}
