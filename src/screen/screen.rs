//! Screen: The double-buffered frame composer.
//!
//! A `Screen` owns two identically sized grids: the frame being composed
//! and a shadow of what was last emitted to the terminal. Each frame runs
//! `clear -> put/set_reverse -> present`; `present` diffs the two grids and
//! flushes only the changed cells to the sink in a single write.

use super::diff::{render_diff, DiffState, DiffStats};
use super::grid::Grid;
use crate::screen::Cell;
use std::io::{self, Write};
use tracing::trace;

/// Double-buffered screen with differential presentation.
pub struct Screen {
    /// What the physical terminal currently shows.
    prev: Grid,
    /// The frame being composed.
    next: Grid,
    /// Cursor tracking across presents.
    state: DiffState,
    /// Pre-allocated output buffer, reused every frame.
    output: Vec<u8>,
}

impl Screen {
    /// Create a screen for the given terminal dimensions.
    ///
    /// The first `present` repaints everything: the previously-emitted grid
    /// starts in a never-displayable state.
    pub fn new(width: u16, height: u16) -> Self {
        let mut prev = Grid::new(width, height);
        prev.fill(Cell::NULL);
        Self {
            prev,
            next: Grid::new(width, height),
            state: DiffState::new(),
            output: Vec::with_capacity(4096),
        }
    }

    /// Screen width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.next.width()
    }

    /// Screen height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.next.height()
    }

    /// Reset the composed frame to all blanks.
    ///
    /// Call exactly once at the start of each frame, before any `put`.
    pub fn clear(&mut self) {
        self.next.clear();
    }

    /// Write a display byte into the composed frame.
    ///
    /// Out-of-bounds coordinates are silently ignored.
    #[inline]
    pub fn put(&mut self, x: u16, y: u16, ch: u8) {
        self.next.put(x, y, ch);
    }

    /// Set or clear reverse video in the composed frame.
    ///
    /// Out-of-bounds coordinates are silently ignored.
    #[inline]
    pub fn set_reverse(&mut self, x: u16, y: u16, reverse: bool) {
        self.next.set_reverse(x, y, reverse);
    }

    /// Reallocate both grids for a new terminal size.
    ///
    /// The previously-emitted grid is invalidated, forcing the next
    /// `present` to repaint every cell.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.next.resize(width, height);
        self.prev.resize(width, height);
        self.prev.fill(Cell::NULL);
        self.state.reset();
    }

    /// Diff the composed frame against the terminal and flush the changes.
    ///
    /// All escape sequences accumulate in an internal buffer and reach the
    /// sink in one `write_all`. Cells that did not change produce zero
    /// output bytes.
    pub fn present<W: Write>(&mut self, sink: &mut W) -> io::Result<DiffStats> {
        self.output.clear();
        let stats = render_diff(&mut self.prev, &self.next, &mut self.output, &mut self.state);

        if !self.output.is_empty() {
            sink.write_all(&self.output)?;
            sink.flush()?;
        }

        trace!(
            cells = stats.cells_changed,
            moves = stats.cursor_moves,
            bytes = stats.bytes,
            "frame presented"
        );
        Ok(stats)
    }

    /// The composed (not yet presented) frame, for inspection in tests.
    #[inline]
    pub const fn frame(&self) -> &Grid {
        &self.next
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_present_paints_everything() {
        let mut screen = Screen::new(4, 2);
        screen.clear();
        let mut sink = Vec::new();
        let stats = screen.present(&mut sink).unwrap();
        assert_eq!(stats.cells_changed, 8);
        assert!(!sink.is_empty());
    }

    #[test]
    fn test_unchanged_frame_emits_nothing() {
        let mut screen = Screen::new(10, 4);
        screen.clear();
        screen.put(2, 1, b'A');
        let mut sink = Vec::new();
        screen.present(&mut sink).unwrap();

        // Same frame again: zero writes.
        screen.clear();
        screen.put(2, 1, b'A');
        let mut sink2 = Vec::new();
        let stats = screen.present(&mut sink2).unwrap();
        assert_eq!(stats.cells_changed, 0);
        assert!(sink2.is_empty());
    }

    #[test]
    fn test_single_change_single_write() {
        let mut screen = Screen::new(10, 4);
        screen.clear();
        let mut sink = Vec::new();
        screen.present(&mut sink).unwrap();

        screen.clear();
        screen.put(3, 2, b'Z');
        let mut sink2 = Vec::new();
        let stats = screen.present(&mut sink2).unwrap();
        assert_eq!(stats.cells_changed, 1);
        assert!(String::from_utf8_lossy(&sink2).contains('Z'));
    }

    #[test]
    fn test_resize_forces_full_repaint() {
        let mut screen = Screen::new(6, 3);
        screen.clear();
        let mut sink = Vec::new();
        screen.present(&mut sink).unwrap();

        screen.resize(5, 2);
        screen.clear();
        let mut sink2 = Vec::new();
        let stats = screen.present(&mut sink2).unwrap();
        // Every visible cell re-emitted exactly once.
        assert_eq!(stats.cells_changed, 5 * 2);
    }

    #[test]
    fn test_clear_discards_previous_frame_content() {
        let mut screen = Screen::new(8, 2);
        screen.clear();
        screen.put(0, 0, b'Q');
        let mut sink = Vec::new();
        screen.present(&mut sink).unwrap();

        // Next frame omits the cell; the diff must blank it out.
        screen.clear();
        let mut sink2 = Vec::new();
        let stats = screen.present(&mut sink2).unwrap();
        assert_eq!(stats.cells_changed, 1);
    }
}
