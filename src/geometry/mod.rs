//! Geometry primitives: points, rectangles, padding and overlap tests.
//!
//! Everything here is plain `Copy` data in integer pixel space. The drawing
//! container and the rectangles drawn inside it share one coordinate space.

mod overlap;
mod padding;
mod point;
mod rect;

pub use overlap::{any_overlap, first_overlap, overlaps};
pub use padding::Padding;
pub use point::Point;
pub use rect::Rect;
