//! Input actor: Dedicated thread for polling terminal events.
//!
//! This actor runs in its own thread and uses crossterm's event polling to
//! capture keyboard and resize events without blocking the editing loop.
//! The poll is timeout-bounded so shutdown stays promptly observable.

use super::events::{EditorEvent, Key};
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

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
    /// * `sender` - Channel to send events to the editing loop.
    /// * `poll_timeout` - How long to wait for events before checking
    ///   shutdown.
    pub fn spawn(sender: Sender<EditorEvent>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("quill-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<EditorEvent>, shutdown: &Arc<AtomicBool>, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(EditorEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if let Some(editor_event) = Self::convert_event(&ev) {
                            if sender.send(editor_event).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(EditorEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {
                    // No event, continue loop (will check shutdown)
                }
                Err(e) => {
                    let _ = sender.send(EditorEvent::Error(e.to_string()));
                }
            }
        }
    }

    /// Convert a crossterm event to an `EditorEvent`.
    fn convert_event(ev: &Event) -> Option<EditorEvent> {
        match ev {
            Event::Key(key_event) => {
                // Only process key press events (not release or repeat)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Self::convert_key_code(key_event.code).map(EditorEvent::Key)
            }

            Event::Resize(width, height) => Some(EditorEvent::Resize {
                width: *width,
                height: *height,
            }),

            _ => None,
        }
    }

    /// Convert crossterm `KeyCode` to our `Key`.
    fn convert_key_code(code: event::KeyCode) -> Option<Key> {
        Some(match code {
            event::KeyCode::Char(c) => Key::Char(c),
            event::KeyCode::Esc => Key::Esc,
            event::KeyCode::Enter => Key::Enter,
            event::KeyCode::Backspace => Key::Backspace,
            event::KeyCode::Left => Key::Left,
            event::KeyCode::Right => Key::Right,
            event::KeyCode::Up => Key::Up,
            event::KeyCode::Down => Key::Down,
            _ => return None, // Ignore other key codes
        })
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
