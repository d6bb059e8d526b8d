//! Tracker: The drag lifecycle that sits between an input source and a
//! [`DragSession`](crate::DragSession).
//!
//! - **`DragTracker`**: State machine turning press/move/release into
//!   `start`/`update`/`finish`, with distance and delay gating
//! - **`InputActor`**: Polls the terminal for mouse events on its own
//!   thread and forwards them over a channel
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐   start/update/finish   ┌─────────────┐
//! │ Input Thread │ ─────────────────▶  │ DragTracker  │ ──────────────────────▶ │ DragSession │
//! └──────────────┘                     └──────────────┘                         └─────────────┘
//!                                             │
//!                                             │ DragUpdate
//!                                             ▼
//!                                      ┌──────────────┐
//!                                      │  Application │
//!                                      └──────────────┘
//! ```

mod events;
mod input;
mod machine;

pub use events::{DragUpdate, InputEvent, PointerEvent, PointerKind};
pub use input::{convert_event, InputActor};
pub use machine::{DragTracker, TrackerState};
