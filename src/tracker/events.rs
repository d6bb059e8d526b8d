//! Event types flowing from an input source into the tracker.

use crate::geometry::{Point, Rect};
use std::time::Instant;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Primary button pressed.
    Press,
    /// Pointer moved while the button is held.
    Move,
    /// Primary button released.
    Release,
}

/// A timestamped pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Where it happened.
    pub position: Point,
    /// When it happened.
    pub at: Instant,
}

impl PointerEvent {
    /// Create an event stamped with the current time.
    pub fn now(kind: PointerKind, position: Point) -> Self {
        Self::at(kind, position, Instant::now())
    }

    /// Create an event with an explicit timestamp.
    pub const fn at(kind: PointerKind, position: Point, at: Instant) -> Self {
        Self { kind, position, at }
    }
}

/// Events from the input thread.
///
/// These are sent from the input actor to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer press, move or release.
    Pointer(PointerEvent),

    /// Abandon the current drag (Escape).
    Cancel,

    /// Leave the application.
    Quit,

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

/// What the tracker did with a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragUpdate {
    /// Nothing changed.
    Ignored,
    /// Button pressed; waiting for distance and delay thresholds.
    Armed(Point),
    /// Thresholds met and the drag began; carries the first frame.
    Started(Rect),
    /// The proxy rectangle was recomputed.
    Resized(Rect),
    /// The resize guard rejected the frame; carries the kept rectangle.
    Vetoed(Rect),
    /// The drag ended; carries the committed rectangle.
    Drawn(Rect),
    /// Pressed and released without ever starting a drag.
    Clicked(Point),
}
