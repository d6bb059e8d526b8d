//! Session module: The drag rectangle computer.
//!
//! A [`DragSession`] turns a stream of pointer positions into the proxy
//! rectangle. It holds no reference to any event source; the host calls
//! `start`, `update` and `finish` directly (or lets a
//! [`DragTracker`](crate::tracker::DragTracker) do it).

mod drag;
mod guard;

pub use drag::{DragSession, Growth};
pub use guard::{AllowAll, AvoidObstacles, ResizeGuard};
