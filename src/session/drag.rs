//! Drag session: Derives the proxy rectangle from pointer movement.
//!
//! A session is idle until [`DragSession::start`] records the drag origin
//! and the container geometry. Each [`DragSession::update`] recomputes the
//! rectangle from scratch:
//!
//! - **Top/left** follow the pointer when it is above/left of the origin,
//!   otherwise stay on the origin. They are clamped to the padded interior
//!   and snapped to the grid (top rounds, left floors).
//! - **Height/width** are the pointer's distance from the origin, rounded up
//!   to whole cells. While the pointer is outside the padded band of an
//!   axis, that axis keeps its previous cell count.
//! - **Border compensation** is added to the left edge and removed once per
//!   horizontal cell from the width.

use super::guard::{AllowAll, ResizeGuard};
use crate::config::DrawConfig;
use crate::error::{DrawError, Result};
use crate::geometry::{Point, Rect};
use crate::grid::{ceil_cells, snap_floor, snap_round};
use bitflags::bitflags;
use tracing::{debug, trace, warn};

bitflags! {
    /// Direction of pointer travel relative to the drag origin.
    ///
    /// An empty set means the pointer is up and to the left of the origin
    /// (or on it), which is when the top-left corner tracks the pointer.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Growth: u8 {
        /// Pointer is right of the origin.
        const RIGHT = 0b01;
        /// Pointer is below the origin.
        const DOWN = 0b10;
    }
}

impl Growth {
    /// Growth of `current` relative to `origin`.
    pub fn between(origin: Point, current: Point) -> Self {
        let mut growth = Self::empty();
        growth.set(Self::RIGHT, origin.x < current.x);
        growth.set(Self::DOWN, origin.y < current.y);
        growth
    }
}

/// State of one drag, fixed at start except for the computed frame.
#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    origin: Point,
    container: Rect,
    config: DrawConfig,
    frame: Frame,
}

/// A computed rectangle plus the cell counts it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    rect: Rect,
    cells_x: i32,
    cells_y: i32,
}

impl Frame {
    const EMPTY: Self = Self {
        rect: Rect::ZERO,
        cells_x: 0,
        cells_y: 0,
    };
}

impl ActiveDrag {
    fn compute(&self, current: Point) -> Frame {
        let Self {
            origin,
            container,
            config,
            frame: previous,
        } = *self;
        let padding = config.padding();
        let cell_w = config.grid().cell_width();
        let cell_h = config.grid().cell_height();
        let border = config.border_compensation();

        let interior = padding.interior(&container);
        let (band_top, band_bottom) = (interior.top, interior.bottom());
        let (band_left, band_right) = (interior.left, interior.right());

        let growth = Growth::between(origin, current);

        // Vertical: grid rows are measured from the container edge.
        let raw_top = if growth.contains(Growth::DOWN) { origin.y } else { current.y };
        let mut top = snap_round(raw_top.max(band_top), container.top, 0, cell_h);
        if top < band_top {
            top = top.saturating_add(cell_h);
        }

        // Horizontal: grid columns are measured from the padded edge.
        let raw_left = if growth.contains(Growth::RIGHT) { origin.x } else { current.x };
        let left = snap_floor(raw_left.max(band_left), container.left, padding.left(), cell_w)
            .saturating_add(border);

        let cells_y = if current.y < band_top || current.y > band_bottom {
            previous.cells_y
        } else {
            ceil_cells(displacement(origin.y, current.y), cell_h)
        };
        let cells_x = if current.x < band_left || current.x > band_right {
            previous.cells_x
        } else {
            ceil_cells(displacement(origin.x, current.x), cell_w)
        };

        let height = cells_y.saturating_mul(cell_h);
        let width = cells_x
            .saturating_mul(cell_w)
            .saturating_sub(cells_x.saturating_mul(border))
            .max(0);

        Frame {
            rect: Rect::new(top, left, width, height),
            cells_x,
            cells_y,
        }
    }

    const fn padded_top(&self) -> i32 {
        self.container.top.saturating_add(self.config.padding().top())
    }
}

fn displacement(from: i32, to: i32) -> i32 {
    i32::try_from(from.abs_diff(to)).unwrap_or(i32::MAX)
}

/// Computes the proxy rectangle for one drag at a time.
///
/// # Example
///
/// ```
/// use drawable::{DragSession, DrawConfig, GridSpec, Point, Rect};
///
/// let container = Rect::new(0, 0, 500, 500);
/// let config = DrawConfig::new().with_grid(GridSpec::square(10));
///
/// let mut session = DragSession::new();
/// session.start(Point::new(100, 100), container, config);
/// let rect = session.update(Point::new(123, 100)).unwrap();
/// assert_eq!(rect.width, 27);
/// assert_eq!(session.finish().unwrap(), rect);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    active: Option<ActiveDrag>,
}

impl DragSession {
    /// Create an idle session.
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Begin a drag at `origin` inside `container`.
    ///
    /// Returns the initial zero-size rectangle, snapped and clamped like any
    /// later frame. Starting while a drag is active discards that drag.
    pub fn start(&mut self, origin: Point, container: Rect, config: DrawConfig) -> Rect {
        if let Some(previous) = self.active.take() {
            warn!(origin = ?previous.origin, "drag restarted before finishing");
        }

        let mut drag = ActiveDrag {
            origin,
            container,
            config,
            frame: Frame::EMPTY,
        };
        drag.frame = drag.compute(origin);
        let rect = drag.frame.rect;
        self.active = Some(drag);

        debug!(?origin, ?container, ?rect, "drag started");
        rect
    }

    /// Recompute the rectangle for the current pointer position.
    pub fn update(&mut self, current: Point) -> Result<Rect> {
        self.update_guarded(current, &mut AllowAll)
    }

    /// Recompute the rectangle, letting `guard` veto the new frame.
    ///
    /// A vetoed frame leaves the rectangle at its previous value, which is
    /// returned.
    pub fn update_guarded<G>(&mut self, current: Point, guard: &mut G) -> Result<Rect>
    where
        G: ResizeGuard + ?Sized,
    {
        let drag = self
            .active
            .as_mut()
            .ok_or(DrawError::InvalidSession { operation: "update" })?;

        let proposed = drag.compute(current);
        trace!(
            ?current,
            rect = ?proposed.rect,
            cells_x = proposed.cells_x,
            cells_y = proposed.cells_y,
            "drag frame"
        );

        if guard.allow_resize(&drag.frame.rect, &proposed.rect) {
            drag.frame = proposed;
        } else {
            debug!(proposed = ?proposed.rect, kept = ?drag.frame.rect, "resize vetoed");
        }
        Ok(drag.frame.rect)
    }

    /// End the drag and return the final rectangle.
    pub fn finish(&mut self) -> Result<Rect> {
        let drag = self
            .active
            .take()
            .ok_or(DrawError::InvalidSession { operation: "finish" })?;
        debug!(rect = ?drag.frame.rect, "drag finished");
        Ok(drag.frame.rect)
    }

    /// Abandon the active drag, if any, returning its last rectangle.
    pub fn cancel(&mut self) -> Option<Rect> {
        let drag = self.active.take()?;
        debug!(rect = ?drag.frame.rect, "drag cancelled");
        Some(drag.frame.rect)
    }

    /// Check if a drag is in progress.
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The current proxy rectangle.
    pub fn rect(&self) -> Option<Rect> {
        self.active.map(|drag| drag.frame.rect)
    }

    /// The drag origin.
    pub fn origin(&self) -> Option<Point> {
        self.active.map(|drag| drag.origin)
    }

    /// Direction of `current` relative to the drag origin.
    pub fn growth(&self, current: Point) -> Option<Growth> {
        self.origin().map(|origin| Growth::between(origin, current))
    }

    /// Distance from the padded top of the container to the proxy's top edge.
    pub fn top_offset(&self) -> Option<i32> {
        self.active.map(|drag| drag.frame.rect.top.saturating_sub(drag.padded_top()))
    }

    /// Distance from the padded top of the container to the proxy's bottom edge.
    pub fn bottom_offset(&self) -> Option<i32> {
        self.active
            .map(|drag| drag.frame.rect.bottom().saturating_sub(drag.padded_top()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Padding;
    use crate::grid::GridSpec;
    use proptest::prelude::*;

    const CONTAINER: Rect = Rect::new(0, 0, 500, 500);

    fn started(origin: Point, config: DrawConfig) -> DragSession {
        let mut session = DragSession::new();
        session.start(origin, CONTAINER, config);
        session
    }

    #[test]
    fn test_start_is_zero_size_at_origin() {
        let mut session = DragSession::new();
        let rect = session.start(Point::new(100, 100), CONTAINER, DrawConfig::default());
        assert_eq!(rect, Rect::new(100, 101, 0, 0));
        assert!(session.is_active());
        assert_eq!(session.rect(), Some(rect));
    }

    #[test]
    fn test_start_snaps_origin() {
        let config = DrawConfig::new().with_grid(GridSpec::square(10));
        let mut session = DragSession::new();
        let rect = session.start(Point::new(107, 104), CONTAINER, config);
        assert_eq!(rect.top, 100);
        assert_eq!(rect.left, 101);
    }

    #[test]
    fn test_drag_up_tracks_pointer() {
        let mut session = started(Point::new(100, 100), DrawConfig::default());
        let rect = session.update(Point::new(100, 40)).unwrap();
        assert_eq!(rect.top, 40);
        assert_eq!(rect.height, 60);
    }

    #[test]
    fn test_drag_down_keeps_top() {
        let mut session = started(Point::new(100, 100), DrawConfig::default());
        let rect = session.update(Point::new(100, 160)).unwrap();
        assert_eq!(rect.top, 100);
        assert_eq!(rect.height, 60);

        let config = DrawConfig::new().with_grid(GridSpec::new(1, 25));
        let mut session = started(Point::new(100, 100), config);
        let rect = session.update(Point::new(100, 160)).unwrap();
        assert_eq!(rect.top, 100);
        assert_eq!(rect.height, 75);
    }

    #[test]
    fn test_width_border_compensation() {
        let config = DrawConfig::new().with_grid(GridSpec::square(10));
        let mut session = started(Point::new(100, 100), config);
        let rect = session.update(Point::new(123, 100)).unwrap();
        assert_eq!(rect.width, 27);
        assert_eq!(rect.left, 101);
    }

    #[test]
    fn test_border_compensation_is_configurable() {
        let config = DrawConfig::new()
            .with_grid(GridSpec::square(10))
            .with_border_compensation(0);
        let mut session = started(Point::new(100, 100), config);
        let rect = session.update(Point::new(123, 100)).unwrap();
        assert_eq!(rect.width, 30);
        assert_eq!(rect.left, 100);
    }

    #[test]
    fn test_drag_left_tracks_pointer() {
        let config = DrawConfig::new().with_grid(GridSpec::square(10));
        let mut session = started(Point::new(100, 100), config);
        let rect = session.update(Point::new(64, 100)).unwrap();
        // 64 floors to 60, plus one pixel of border
        assert_eq!(rect.left, 61);
        assert_eq!(rect.width, 36);
    }

    #[test]
    fn test_top_clamped_to_padding() {
        let config = DrawConfig::new().with_padding(Padding::new(20, 0, 0, 30));
        let mut session = started(Point::new(100, 100), config);
        let rect = session.update(Point::new(100, 5)).unwrap();
        assert_eq!(rect.top, 20);
        let rect = session.update(Point::new(10, 50)).unwrap();
        assert_eq!(rect.left, 31);
    }

    #[test]
    fn test_clamped_top_stays_inside_after_rounding() {
        // Padding 4 with 10px rows: rounding would pull the top back to 0.
        let config = DrawConfig::new()
            .with_padding(Padding::uniform(4))
            .with_grid(GridSpec::square(10));
        let mut session = started(Point::new(100, 100), config);
        let rect = session.update(Point::new(100, 2)).unwrap();
        assert_eq!(rect.top, 10);
    }

    #[test]
    fn test_origin_on_padding_boundary() {
        let config = DrawConfig::new().with_padding(Padding::uniform(20));
        let mut session = DragSession::new();
        let rect = session.start(Point::new(20, 20), CONTAINER, config);
        assert_eq!(rect.top, 20);
        assert_eq!(rect.left, 21);
        let rect = session.update(Point::new(50, 60)).unwrap();
        assert_eq!(rect.top, 20);
        assert_eq!(rect.height, 40);
    }

    #[test]
    fn test_height_freezes_outside_band() {
        let mut session = started(Point::new(100, 100), DrawConfig::default());
        assert_eq!(session.update(Point::new(100, 150)).unwrap().height, 50);

        let rect = session.update(Point::new(100, 600)).unwrap();
        assert_eq!(rect.height, 50);

        let rect = session.update(Point::new(100, -20)).unwrap();
        assert_eq!(rect.height, 50);
        assert_eq!(rect.top, 0);

        let rect = session.update(Point::new(100, 130)).unwrap();
        assert_eq!(rect.height, 30);
    }

    #[test]
    fn test_width_freezes_outside_band() {
        let config = DrawConfig::new()
            .with_grid(GridSpec::new(2, 1))
            .with_padding(Padding::new(0, 50, 0, 0));
        let mut session = started(Point::new(100, 100), config);
        // 5px covers 3 cells of 2px, minus 3px of border
        assert_eq!(session.update(Point::new(105, 100)).unwrap().width, 3);
        // beyond the right padding: width holds without drifting
        assert_eq!(session.update(Point::new(460, 100)).unwrap().width, 3);
        assert_eq!(session.update(Point::new(470, 100)).unwrap().width, 3);
    }

    #[test]
    fn test_growth_directions() {
        let session = started(Point::new(100, 100), DrawConfig::default());
        assert_eq!(session.growth(Point::new(150, 150)), Some(Growth::RIGHT | Growth::DOWN));
        assert_eq!(session.growth(Point::new(50, 150)), Some(Growth::DOWN));
        assert_eq!(session.growth(Point::new(100, 100)), Some(Growth::empty()));
        assert_eq!(DragSession::new().growth(Point::ORIGIN), None);
    }

    #[test]
    fn test_offsets() {
        let config = DrawConfig::new().with_padding(Padding::new(10, 0, 0, 0));
        let mut session = DragSession::new();
        session.start(Point::new(60, 60), Rect::new(40, 0, 300, 300), config);
        session.update(Point::new(60, 90)).unwrap();
        assert_eq!(session.top_offset(), Some(10));
        assert_eq!(session.bottom_offset(), Some(40));
    }

    #[test]
    fn test_veto_keeps_previous_frame() {
        let mut session = started(Point::new(100, 100), DrawConfig::default());
        let first = session.update(Point::new(100, 150)).unwrap();

        let mut deny = |_: &Rect, proposed: &Rect| proposed.height <= 50;
        let rect = session.update_guarded(Point::new(100, 200), &mut deny).unwrap();
        assert_eq!(rect, first);
        assert_eq!(session.rect(), Some(first));

        let rect = session.update_guarded(Point::new(100, 120), &mut deny).unwrap();
        assert_eq!(rect.height, 20);
    }

    #[test]
    fn test_update_without_start_fails() {
        let mut session = DragSession::new();
        let err = session.update(Point::new(1, 1)).unwrap_err();
        assert!(matches!(err, DrawError::InvalidSession { operation: "update" }));
        assert!(session.finish().is_err());
        assert_eq!(session.cancel(), None);
    }

    #[test]
    fn test_finish_ends_session() {
        let mut session = started(Point::new(100, 100), DrawConfig::default());
        let rect = session.update(Point::new(100, 180)).unwrap();
        assert_eq!(session.finish().unwrap(), rect);
        assert!(!session.is_active());
        assert!(session.update(Point::new(100, 190)).is_err());
    }

    #[test]
    fn test_restart_replaces_drag() {
        let mut session = started(Point::new(100, 100), DrawConfig::default());
        session.update(Point::new(100, 180)).unwrap();
        let rect = session.start(Point::new(10, 10), CONTAINER, DrawConfig::default());
        assert_eq!(rect.height, 0);
        assert_eq!(session.origin(), Some(Point::new(10, 10)));
    }

    #[test]
    fn test_negative_padding_cannot_escape_container() {
        let config = DrawConfig::new().with_padding(Padding::new(-20, 0, 0, -20));
        let mut session = started(Point::new(100, 100), config);
        let rect = session.update(Point::new(-50, -50)).unwrap();
        assert_eq!(rect.top, 0);
        assert_eq!(rect.left, 1);
        assert!(rect.width >= 0 && rect.height >= 0);
    }

    #[test]
    fn test_extreme_container_saturates() {
        let config = DrawConfig::new().with_padding(Padding::uniform(10));
        let container = Rect::new(i32::MAX - 5, 0, 100, 100);
        let mut session = DragSession::new();
        let rect = session.start(Point::new(0, i32::MAX - 20), container, config);
        assert_eq!(rect.top, i32::MAX);
        assert_eq!(rect.height, 0);

        let rect = session.update(Point::new(i32::MIN, i32::MIN)).unwrap();
        assert_eq!(rect.top, i32::MAX);
        assert_eq!(rect.left, 11);
        assert_eq!(session.top_offset(), Some(0));
        assert_eq!(session.bottom_offset(), Some(0));

        let container = Rect::new(i32::MIN, i32::MIN, 100, 100);
        let rect = session.start(Point::new(i32::MIN, i32::MIN), container, config);
        assert_eq!(rect.top, i32::MIN + 10);
        let rect = session.update(Point::new(i32::MAX, i32::MAX)).unwrap();
        assert!(rect.width >= 0 && rect.height >= 0);
    }

    proptest! {
        #[test]
        fn prop_extents_never_negative(
            ox in 0..500i32, oy in 0..500i32,
            points in prop::collection::vec((-200..700i32, -200..700i32), 1..20),
            cell_w in 0..40i32, cell_h in 0..40i32,
            border in 0..5i32,
            pad in 0..30i32,
        ) {
            let config = DrawConfig::new()
                .with_grid(GridSpec::new(cell_w, cell_h))
                .with_border_compensation(border)
                .with_padding(Padding::uniform(pad));
            let mut session = started(Point::new(ox, oy), config);
            for (x, y) in points {
                let rect = session.update(Point::new(x, y)).unwrap();
                prop_assert!(rect.width >= 0);
                prop_assert!(rect.height >= 0);
                prop_assert!(rect.top >= CONTAINER.top + pad);
                prop_assert!(rect.left >= CONTAINER.left + pad);
            }
        }
    }
}
