//! Event types delivered from the input thread to the editing loop.

/// Key codes the editor cares about.
///
/// This is a deliberately small subset of crossterm's `KeyCode`; anything
/// outside it is dropped at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Escape key.
    Esc,
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
}

/// Events the editing loop polls once per iteration.
///
/// Resize and shutdown arrive through the same channel as keys, so no
/// logic ever runs in a signal context and the main loop observes both
/// between frames.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    /// A key was pressed.
    Key(Key),

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down; the loop should exit cleanly.
    Shutdown,
}
