//! Grid: A matrix of cells representing one terminal frame.
//!
//! Cells are stored in a contiguous `Vec` in row-major order for cache
//! efficiency: `index = y * width + x`. Out-of-bounds writes are silent
//! no-ops, never errors; layout math (wrapping, status-line placement) is
//! allowed to transiently compute coordinates at the grid edge.

use super::cell::Cell;

/// A `width x height` matrix of display cells.
#[derive(Clone)]
pub struct Grid {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl Grid {
    /// Create a new grid with every cell blank.
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::BLANK; size],
            width,
            height,
        }
    }

    /// Grid width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a mutable reference to the underlying cell slice.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get the cell at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Write a display byte at (x, y), preserving the cell's attributes.
    ///
    /// Silent no-op when out of bounds.
    #[inline]
    pub fn put(&mut self, x: u16, y: u16, ch: u8) {
        if let Some(idx) = self.index_of(x, y) {
            let attrs = self.cells[idx].attrs();
            self.cells[idx] = Cell::new(ch).with_attrs(attrs);
        }
    }

    /// Set or clear reverse video at (x, y).
    ///
    /// Silent no-op when out of bounds.
    #[inline]
    pub fn set_reverse(&mut self, x: u16, y: u16, reverse: bool) {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx].set_reverse(reverse);
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Fill every cell with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Reallocate to new dimensions, resetting content to blank.
    ///
    /// Terminal content after a resize is unknown anyway; the caller
    /// invalidates the previously-emitted grid to force a full repaint.
    pub fn resize(&mut self, width: u16, height: u16) {
        let size = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(size, Cell::BLANK);
        self.width = width;
        self.height = height;
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new_blank() {
        let grid = Grid::new(80, 24);
        assert_eq!(grid.width(), 80);
        assert_eq!(grid.height(), 24);
        assert_eq!(grid.len(), 80 * 24);
        assert_eq!(grid.get(0, 0), Some(&Cell::BLANK));
    }

    #[test]
    fn test_grid_put_get() {
        let mut grid = Grid::new(80, 24);
        grid.put(5, 10, b'X');
        assert_eq!(grid.get(5, 10).unwrap().ch(), b'X');
    }

    #[test]
    fn test_grid_out_of_bounds_is_noop() {
        let mut grid = Grid::new(10, 5);
        grid.put(10, 0, b'X');
        grid.put(0, 5, b'X');
        grid.set_reverse(10, 5, true);
        assert!(grid.get(10, 0).is_none());
        assert!(grid.cells().iter().all(|c| *c == Cell::BLANK));
    }

    #[test]
    fn test_grid_put_preserves_reverse() {
        let mut grid = Grid::new(10, 5);
        grid.set_reverse(3, 2, true);
        grid.put(3, 2, b'A');
        let cell = grid.get(3, 2).unwrap();
        assert_eq!(cell.ch(), b'A');
        assert!(cell.is_reversed());
    }

    #[test]
    fn test_grid_clear() {
        let mut grid = Grid::new(10, 5);
        grid.put(1, 1, b'Q');
        grid.set_reverse(1, 1, true);
        grid.clear();
        assert_eq!(grid.get(1, 1), Some(&Cell::BLANK));
    }

    #[test]
    fn test_grid_resize_resets_to_blank() {
        let mut grid = Grid::new(10, 5);
        grid.put(1, 1, b'Q');
        grid.resize(20, 10);
        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.get(1, 1), Some(&Cell::BLANK));
    }

    #[test]
    fn test_grid_index_of() {
        let grid = Grid::new(80, 24);
        assert_eq!(grid.index_of(5, 10), Some(10 * 80 + 5));
        assert_eq!(grid.index_of(80, 0), None);
        assert_eq!(grid.index_of(0, 24), None);
    }

    #[test]
    fn test_grid_zero_area() {
        let mut grid = Grid::new(0, 0);
        assert!(grid.is_empty());
        grid.put(0, 0, b'X'); // no-op, no panic
    }
}
