//! # Quill
//!
//! A modal terminal text editor built on two core subsystems:
//!
//! - **Gap-buffer document**: one gap buffer per line, so edits at a
//!   stable cursor are O(1) amortized and cursor moves are a single block
//!   copy
//! - **Differential rendering**: a double-buffered cell grid that emits
//!   terminal output only for cells that changed since the last frame
//!
//! The editing loop is single-threaded and synchronous; one input actor
//! thread feeds keys, resizes, and shutdown requests over a channel the
//! loop polls with a bounded wait.
//!
//! ## Example
//!
//! ```rust,ignore
//! use quill::{Document, Screen};
//!
//! let mut doc = Document::open("notes.txt")?;
//! doc.set_cursor(0, 0);
//! doc.insert_char(0, b'#');
//!
//! let mut screen = Screen::new(80, 24);
//! screen.clear();
//! screen.put(0, 0, b'#');
//! screen.present(&mut std::io::stdout())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod document;
pub mod editor;
pub mod input;
pub mod screen;
pub mod terminal;

// Re-exports for convenience
pub use document::{Document, GapLine, LoadError, SaveError};
pub use editor::{Editor, EditorConfig, EditorError, Mode};
pub use input::{EditorEvent, InputActor, Key};
pub use screen::{Cell, CellAttrs, DiffStats, Grid, Screen};
pub use terminal::TerminalSession;
