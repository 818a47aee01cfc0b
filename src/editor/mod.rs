//! Editor module: The modal editing loop gluing the document to the screen.
//!
//! The editor is single-threaded and synchronous: one loop iteration polls
//! the event channel with a bounded wait, applies at most one event to the
//! document, recomposes the frame, and presents it. Quitting is
//! cooperative; the loop exits into the save-then-drop cleanup path.

pub mod layout;
mod view;

use crate::document::{Document, SaveError};
use crate::input::{EditorEvent, Key};
use crate::screen::Screen;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::io::{self, Write};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Motion and operator keys.
    Normal,
    /// Keystrokes insert text.
    Insert,
}

impl Mode {
    /// Status-line name of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
        }
    }
}

/// Configuration for the editor loop.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Columns reserved for the line-number gutter.
    pub gutter_width: u16,
    /// Bounded wait on the event channel per loop iteration.
    pub poll_timeout: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            gutter_width: 5,
            poll_timeout: Duration::from_millis(50),
        }
    }
}

/// A failure that ends the editing session.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Frame presentation failed.
    #[error("render failed: {0}")]
    Render(#[from] io::Error),

    /// The document could not be persisted on exit.
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// The modal editor: document, cursor, scroll, and mode.
pub struct Editor {
    /// The document being edited.
    document: Document,
    /// Current editing mode.
    mode: Mode,
    /// Cursor line (document index).
    cursor_line: usize,
    /// Cursor column (logical, clamped to the line length).
    cursor_col: usize,
    /// First visible visual row of the text viewport.
    scroll: usize,
    /// Loop configuration.
    config: EditorConfig,
    /// Cleared by `q` or a shutdown event.
    running: bool,
}

impl Editor {
    /// Create an editor over a loaded document.
    pub const fn new(document: Document, config: EditorConfig) -> Self {
        Self {
            document,
            mode: Mode::Normal,
            cursor_line: 0,
            cursor_col: 0,
            scroll: 0,
            config,
            running: true,
        }
    }

    /// Current mode.
    #[inline]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Cursor position as `(line, column)`.
    #[inline]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.cursor_line, self.cursor_col)
    }

    /// The underlying document.
    #[inline]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Whether the loop is still running.
    #[inline]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Run the editing loop until quit, then save the document.
    ///
    /// A save failure is returned to the caller (after the loop has exited)
    /// rather than retried; the in-memory document stays intact until drop.
    pub fn run<W: Write>(
        &mut self,
        events: &Receiver<EditorEvent>,
        screen: &mut Screen,
        sink: &mut W,
    ) -> Result<(), EditorError> {
        while self.running {
            match events.recv_timeout(self.config.poll_timeout) {
                Ok(EditorEvent::Key(key)) => self.handle_key(key),
                Ok(EditorEvent::Resize { width, height }) => {
                    info!(width, height, "terminal resized");
                    screen.resize(width, height);
                }
                Ok(EditorEvent::Error(msg)) => warn!(%msg, "input error"),
                Ok(EditorEvent::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                    self.running = false;
                }
                Err(RecvTimeoutError::Timeout) => {}
            }

            screen.clear();
            self.compose(screen);
            screen.present(sink)?;
        }

        info!(path = %self.document.path().display(), "saving on exit");
        self.document.save()?;
        Ok(())
    }

    /// Apply one keypress to the editor state.
    pub fn handle_key(&mut self, key: Key) {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Insert => self.handle_insert_key(key),
        }
        self.sync_cursor();
    }

    /// NORMAL mode: motion and operators.
    fn handle_normal_key(&mut self, key: Key) {
        match key {
            Key::Char('q') => self.running = false,
            Key::Char('i') => self.mode = Mode::Insert,
            Key::Char('h') | Key::Left => self.move_left(),
            Key::Char('l') | Key::Right => {
                // Stops on the last character, not the append position.
                let len = self.line_len();
                if self.cursor_col + 1 < len {
                    self.cursor_col += 1;
                }
            }
            Key::Char('j') | Key::Down => self.move_down(),
            Key::Char('k') | Key::Up => self.move_up(),
            Key::Char('x') => {
                self.sync_cursor();
                self.document.delete_forward(self.cursor_line);
            }
            _ => {}
        }
    }

    /// INSERT mode: text entry and arrow motion.
    fn handle_insert_key(&mut self, key: Key) {
        match key {
            Key::Esc => self.mode = Mode::Normal,
            Key::Left => self.move_left(),
            Key::Right => {
                // The append position is reachable while inserting.
                if self.cursor_col < self.line_len() {
                    self.cursor_col += 1;
                }
            }
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            Key::Char(c) if (' '..='~').contains(&c) => {
                self.sync_cursor();
                #[allow(clippy::cast_possible_truncation)]
                self.document.insert_char(self.cursor_line, c as u8);
                self.cursor_col += 1;
            }
            _ => {}
        }
    }

    fn move_left(&mut self) {
        self.cursor_col = self.cursor_col.saturating_sub(1);
    }

    fn move_up(&mut self) {
        if self.cursor_line > 0 {
            self.cursor_line -= 1;
            self.clamp_col();
        }
    }

    fn move_down(&mut self) {
        if self.cursor_line + 1 < self.document.line_count() {
            self.cursor_line += 1;
            self.clamp_col();
        }
    }

    /// Length of the cursor line.
    fn line_len(&self) -> usize {
        self.document.line_length(self.cursor_line).unwrap_or(0)
    }

    fn clamp_col(&mut self) {
        self.cursor_col = self.cursor_col.min(self.line_len());
    }

    /// Re-anchor the document's gap at the cursor and clamp the column.
    ///
    /// Mutations always target the gap position, so this runs after every
    /// keypress; skipping it would edit at a stale position.
    fn sync_cursor(&mut self) {
        self.clamp_col();
        self.document.set_cursor(self.cursor_line, self.cursor_col);
    }

    /// Scroll offset (first visible visual row), for tests.
    #[inline]
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    pub(crate) fn set_scroll(&mut self, scroll: usize) {
        self.scroll = scroll;
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("mode", &self.mode)
            .field("cursor", &(self.cursor_line, self.cursor_col))
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}
