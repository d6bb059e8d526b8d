//! Input Actor: Dedicated thread for polling terminal mouse events.
//!
//! This actor runs in its own thread and uses crossterm's event polling
//! to turn left-button mouse activity into pointer events, without
//! blocking the thread that owns the drag tracker. Terminal cells are the
//! pixel unit: column is `x`, row is `y`.

use super::events::{InputEvent, PointerEvent, PointerKind};
use crate::geometry::Point;
use crossbeam_channel::{SendTimeoutError, Sender};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send input events to the main loop.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = Arc::clone(&shutdown);

        let handle = thread::Builder::new()
            .name("drawable-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        debug!("input actor started");
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.try_send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(input_event) = convert_event(event) {
                            // A full channel drops the event so shutdown stays responsive
                            if let Err(SendTimeoutError::Disconnected(_)) =
                                sender.send_timeout(input_event, poll_timeout)
                            {
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "terminal read failed");
                        let _ = sender.try_send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "terminal poll failed");
                    let _ = sender.try_send(InputEvent::Error(e.to_string()));
                    thread::sleep(poll_timeout);
                }
            }
        }
        debug!("input actor stopped");
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

/// Convert a crossterm event to our `InputEvent`.
pub fn convert_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            match key.code {
                KeyCode::Esc => Some(InputEvent::Cancel),
                KeyCode::Char('q') => Some(InputEvent::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::Quit)
                }
                _ => None,
            }
        }
        Event::Mouse(mouse) => {
            let kind = match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => PointerKind::Press,
                MouseEventKind::Drag(MouseButton::Left) => PointerKind::Move,
                MouseEventKind::Up(MouseButton::Left) => PointerKind::Release,
                _ => return None,
            };
            let position = Point::new(i32::from(mouse.column), i32::from(mouse.row));
            Some(InputEvent::Pointer(PointerEvent::now(kind, position)))
        }
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
    }
}
