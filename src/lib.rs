//! # Drawable
//!
//! Draw grid-snapped rectangles by dragging a pointer across a container.
//!
//! The engine recomputes the proxy rectangle on every pointer movement from
//! the drag origin, the current pointer position, the grid resolution and
//! the container's padding, and tests it for overlap against existing
//! regions.
//!
//! ## Core Concepts
//!
//! - **Directional growth**: the box grows up/left by moving its corner and
//!   down/right by growing its extent
//! - **Padded clamping**: clamped edges never leave the padded interior
//! - **Grid snapping**: positions snap to grid lines, extents to whole cells
//! - **Strict overlap**: blocks sharing an edge do not collide
//!
//! ## Example
//!
//! ```rust
//! use drawable::{overlaps, DragSession, DrawConfig, GridSpec, Padding, Point, Rect};
//!
//! let container = Rect::new(0, 0, 700, 480);
//! let config = DrawConfig::new()
//!     .with_padding(Padding::uniform(10))
//!     .with_grid(GridSpec::new(100, 20));
//!
//! let mut session = DragSession::new();
//! session.start(Point::new(120, 40), container, config);
//! session.update(Point::new(180, 95)).unwrap();
//! let block = session.finish().unwrap();
//!
//! assert_eq!(block.height, 60);
//! assert!(!overlaps(&block, &Rect::new(100, 0, 700, 40)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod session;
pub mod tracker;

// Re-exports for convenience
pub use config::DrawConfig;
pub use error::{DrawError, Result};
pub use geometry::{any_overlap, first_overlap, overlaps, Padding, Point, Rect};
pub use grid::GridSpec;
pub use session::{AllowAll, AvoidObstacles, DragSession, Growth, ResizeGuard};
pub use tracker::{DragTracker, DragUpdate, InputActor, InputEvent, PointerEvent, PointerKind, TrackerState};
