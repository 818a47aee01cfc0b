//! Diffing engine: Generate minimal ANSI output from frame changes.
//!
//! This is the core of the renderer:
//! 1. Compare the composed frame against the previously-emitted grid
//! 2. Emit escape sequences only for cells that actually changed
//! 3. Skip explicit cursor moves when writing adjacent cells
//!
//! Output accumulates in a single buffer so the caller can flush it with
//! one write. Terminal I/O volume is proportional to the number of changed
//! cells, not to screen area.

use super::cell::Cell;
use super::grid::Grid;
use std::io::Write;

/// Tracker for the physical terminal cursor position.
///
/// Writing a byte advances the terminal cursor, so consecutive changed
/// cells on the same row need no explicit move sequence.
#[derive(Debug, Clone)]
pub struct DiffState {
    /// Last known cursor X position (0-indexed).
    cursor_x: u16,
    /// Last known cursor Y position (0-indexed).
    cursor_y: u16,
}

impl Default for DiffState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffState {
    /// Create a state with unknown cursor position (forces the first move).
    pub const fn new() -> Self {
        Self {
            cursor_x: u16::MAX,
            cursor_y: u16::MAX,
        }
    }

    /// Forget the cursor position (e.g. after a resize or raw write).
    pub const fn reset(&mut self) {
        self.cursor_x = u16::MAX;
        self.cursor_y = u16::MAX;
    }
}

/// Statistics from one diff pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Number of cells that were redrawn.
    pub cells_changed: usize,
    /// Number of explicit cursor move sequences emitted.
    pub cursor_moves: usize,
    /// Number of output bytes produced.
    pub bytes: usize,
}

/// Diff the composed frame against the previously-emitted grid.
///
/// For every position whose cell differs, this emits a cursor move (unless
/// the terminal cursor is already there), writes the byte with reverse
/// video toggled around it when the cell is highlighted, and copies the new
/// cell into `prev`. Unchanged positions are never touched.
///
/// The grids must have identical dimensions; the caller resizes them in
/// lockstep.
pub fn render_diff(
    prev: &mut Grid,
    next: &Grid,
    output: &mut Vec<u8>,
    state: &mut DiffState,
) -> DiffStats {
    debug_assert_eq!(prev.width(), next.width());
    debug_assert_eq!(prev.height(), next.height());

    let before = output.len();
    let mut stats = DiffStats::default();
    let width = next.width();
    let height = next.height();

    for y in 0..height {
        for x in 0..width {
            let idx = (y as usize) * (width as usize) + (x as usize);
            let next_cell = next.cells()[idx];

            if prev.cells()[idx] == next_cell {
                continue;
            }

            stats.cells_changed += 1;

            if state.cursor_y != y || state.cursor_x != x {
                emit_cursor_move(output, x, y);
                state.cursor_x = x;
                state.cursor_y = y;
                stats.cursor_moves += 1;
            }

            emit_cell(output, next_cell);

            // The terminal cursor advanced past the written byte.
            state.cursor_x = state.cursor_x.saturating_add(1);

            // Snapshot only the cells actually redrawn.
            prev.cells_mut()[idx] = next_cell;
        }
    }

    stats.bytes = output.len() - before;
    stats
}

/// Emit a cursor move sequence.
///
/// Uses the most compact representation:
/// - `\x1b[H` for home (1,1)
/// - `\x1b[{row}H` for column 1 of row N
/// - `\x1b[{row};{col}H` for absolute positioning
#[inline]
fn emit_cursor_move(output: &mut Vec<u8>, x: u16, y: u16) {
    // ANSI uses 1-indexed positions
    let row = y + 1;
    let col = x + 1;

    if row == 1 && col == 1 {
        output.extend_from_slice(b"\x1b[H");
    } else if col == 1 {
        let _ = write!(output, "\x1b[{row}H");
    } else {
        let _ = write!(output, "\x1b[{row};{col}H");
    }
}

/// Emit one cell: reverse video is toggled on and off around highlighted
/// cells so attribute state never leaks between cells.
#[inline]
fn emit_cell(output: &mut Vec<u8>, cell: Cell) {
    if cell.is_reversed() {
        output.extend_from_slice(b"\x1b[7m");
        output.push(cell.ch());
        output.extend_from_slice(b"\x1b[27m");
    } else {
        output.push(cell.ch());
    }
}
