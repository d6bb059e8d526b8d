//! Drag tracker: Sequences pointer events into drag sessions.
//!
//! ```text
//!            press                 moved >= distance
//!   Idle ───────────▶ Pending ──────────────────────▶ Dragging
//!    ▲                   │      and delay elapsed        │
//!    │      release      │                               │ release
//!    └───────────────────┴───────────────────────────────┘
//! ```

use super::events::{DragUpdate, PointerEvent, PointerKind};
use crate::config::DrawConfig;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::session::{AllowAll, DragSession, ResizeGuard};
use std::time::Instant;
use tracing::debug;

/// Observable tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerState {
    /// No button held.
    Idle,
    /// Button held, drag not yet started.
    Pending,
    /// Drag in progress.
    Dragging,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Pending { press: Point, pressed_at: Instant },
    Dragging,
}

/// Host-side drag lifecycle for one drawing container.
///
/// Owns the container bounds, the configuration and the resize guard, and
/// drives a [`DragSession`] from press/move/release events.
#[derive(Debug)]
pub struct DragTracker<G = AllowAll> {
    config: DrawConfig,
    container: Rect,
    guard: G,
    phase: Phase,
    session: DragSession,
}

impl DragTracker<AllowAll> {
    /// Create a tracker that accepts every frame.
    pub const fn new(container: Rect, config: DrawConfig) -> Self {
        Self::with_guard(container, config, AllowAll)
    }
}

impl<G: ResizeGuard> DragTracker<G> {
    /// Create a tracker with a resize guard.
    pub const fn with_guard(container: Rect, config: DrawConfig, guard: G) -> Self {
        Self {
            config,
            container,
            guard,
            phase: Phase::Idle,
            session: DragSession::new(),
        }
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> TrackerState {
        match self.phase {
            Phase::Idle => TrackerState::Idle,
            Phase::Pending { .. } => TrackerState::Pending,
            Phase::Dragging => TrackerState::Dragging,
        }
    }

    /// Container bounds used for the next drag.
    pub const fn container(&self) -> Rect {
        self.container
    }

    /// Replace the container bounds. An active drag keeps the old bounds.
    pub const fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    /// The configuration.
    pub const fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// The underlying session, for offset and growth queries.
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// The resize guard.
    pub const fn guard_mut(&mut self) -> &mut G {
        &mut self.guard
    }

    /// Feed one pointer event.
    pub fn handle(&mut self, event: &PointerEvent) -> Result<DragUpdate> {
        match (self.phase, event.kind) {
            (Phase::Idle | Phase::Pending { .. }, PointerKind::Press) => {
                self.phase = Phase::Pending {
                    press: event.position,
                    pressed_at: event.at,
                };
                debug!(press = ?event.position, "drag armed");
                Ok(DragUpdate::Armed(event.position))
            }
            (Phase::Pending { press, pressed_at }, PointerKind::Move) => {
                if !self.thresholds_met(press, pressed_at, event) {
                    return Ok(DragUpdate::Ignored);
                }
                self.session.start(press, self.container, self.config);
                self.phase = Phase::Dragging;
                let rect = self.session.update_guarded(event.position, &mut self.guard)?;
                Ok(DragUpdate::Started(rect))
            }
            (Phase::Pending { press, .. }, PointerKind::Release) => {
                self.phase = Phase::Idle;
                debug!(?press, "click without drag");
                Ok(DragUpdate::Clicked(press))
            }
            (Phase::Dragging, PointerKind::Move) => self.resize(event.position),
            (Phase::Dragging, PointerKind::Release) => {
                self.phase = Phase::Idle;
                Ok(DragUpdate::Drawn(self.session.finish()?))
            }
            (Phase::Idle, PointerKind::Move | PointerKind::Release)
            | (Phase::Dragging, PointerKind::Press) => Ok(DragUpdate::Ignored),
        }
    }

    /// Abandon a pending or active drag.
    ///
    /// Returns the last proxy rectangle if a drag had started.
    pub fn cancel(&mut self) -> Option<Rect> {
        self.phase = Phase::Idle;
        self.session.cancel()
    }

    fn thresholds_met(&self, press: Point, pressed_at: Instant, event: &PointerEvent) -> bool {
        let far_enough = press.chebyshev_distance(&event.position) >= self.config.distance;
        let late_enough = event.at.saturating_duration_since(pressed_at) >= self.config.delay;
        far_enough && late_enough
    }

    fn resize(&mut self, position: Point) -> Result<DragUpdate> {
        let guard = &mut self.guard;
        let mut vetoed = false;
        let rect = self.session.update_guarded(
            position,
            &mut |current: &Rect, proposed: &Rect| {
                let allowed = guard.allow_resize(current, proposed);
                vetoed = !allowed;
                allowed
            },
        )?;
        Ok(if vetoed {
            DragUpdate::Vetoed(rect)
        } else {
            DragUpdate::Resized(rect)
        })
    }
}
