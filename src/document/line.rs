//! Gap-buffer line: The mutable storage unit for a single line of text.
//!
//! Each line keeps one contiguous run of unused capacity (the gap) at the
//! most recent edit position, so repeated insertions and deletions at a
//! stable cursor cost O(1) amortized. Moving the cursor relocates the gap
//! with a single block copy of the intervening bytes.

/// Initial gap size given to every line on document load.
pub(crate) const GAP_INIT: usize = 32;

/// Minimum number of bytes added when the gap is regrown.
const GROW_MIN: usize = 8;

/// A single line of text stored as a gap buffer.
///
/// The backing `Vec<u8>` always has length equal to the line's capacity.
/// Bytes in `[gap_start, gap_end)` are the gap; everything before it is the
/// left content segment and everything after it is the right content
/// segment. Logical columns address the content as if the gap did not exist.
///
/// # Invariants
///
/// - `gap_start <= gap_end <= buf.len()`
/// - logical length = `gap_start + (buf.len() - gap_end)`
#[derive(Clone)]
pub struct GapLine {
    /// Backing storage; gap bytes are kept zeroed.
    buf: Vec<u8>,
    /// First byte of the gap.
    gap_start: usize,
    /// One past the last byte of the gap.
    gap_end: usize,
}

impl GapLine {
    /// Create a line from source bytes, with the gap appended at the end.
    ///
    /// The line starts append-ready: the gap sits after the last character.
    pub fn from_bytes(content: &[u8]) -> Self {
        let mut buf = Vec::with_capacity(content.len() + GAP_INIT);
        buf.extend_from_slice(content);
        buf.resize(content.len() + GAP_INIT, 0);
        Self {
            gap_start: content.len(),
            gap_end: buf.len(),
            buf,
        }
    }

    /// Create an empty line.
    pub fn empty() -> Self {
        Self::from_bytes(&[])
    }

    /// Logical length of the line (content bytes, gap excluded).
    #[inline]
    pub const fn len(&self) -> usize {
        self.gap_start + (self.buf.len() - self.gap_end)
    }

    /// Check if the line has no content.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current cursor column (the gap position).
    #[inline]
    pub const fn cursor(&self) -> usize {
        self.gap_start
    }

    /// Total capacity, including the gap.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Map a logical column to its physical index in the backing storage.
    ///
    /// This is the single source of truth for logical-to-physical
    /// translation; every accessor goes through it.
    #[inline]
    const fn physical_index(&self, col: usize) -> usize {
        if col < self.gap_start {
            col
        } else {
            col + (self.gap_end - self.gap_start)
        }
    }

    /// Get the byte at a logical column.
    ///
    /// Returns `None` when the column is outside `[0, len)`.
    #[inline]
    pub fn char_at(&self, col: usize) -> Option<u8> {
        if col >= self.len() {
            return None;
        }
        Some(self.buf[self.physical_index(col)])
    }

    /// Move the gap so it sits exactly at `col` (clamped to `[0, len]`).
    ///
    /// Content between the old and new gap position is shifted across the
    /// gap boundary with a single block copy.
    pub fn move_gap_to(&mut self, col: usize) {
        let col = col.min(self.len());

        if col < self.gap_start {
            // Shift the tail of the left segment rightward across the gap.
            let amount = self.gap_start - col;
            self.buf.copy_within(col..self.gap_start, self.gap_end - amount);
            self.gap_start = col;
            self.gap_end -= amount;
        } else if col > self.gap_start {
            // Shift the head of the right segment leftward across the gap.
            let amount = col - self.gap_start;
            self.buf
                .copy_within(self.gap_end..self.gap_end + amount, self.gap_start);
            self.gap_start += amount;
            self.gap_end += amount;
        }
    }

    /// Place the edit cursor at `col` (clamped to `[0, len]`).
    ///
    /// After this call the gap sits exactly at the edit point, so the next
    /// `insert` or `delete_forward` targets this column.
    #[inline]
    pub fn set_cursor(&mut self, col: usize) {
        self.move_gap_to(col);
    }

    /// Insert a byte at the cursor and advance the cursor past it.
    ///
    /// When the gap is exhausted the storage is regrown by
    /// `max(len / 2, 8)` bytes with the gap re-centered at the edit point.
    /// Growth goes through the global allocator; on allocation failure the
    /// process aborts rather than dropping the byte.
    pub fn insert(&mut self, byte: u8) {
        if self.gap_start == self.gap_end {
            self.grow();
        }
        self.buf[self.gap_start] = byte;
        self.gap_start += 1;
    }

    /// Delete the character immediately after the cursor.
    ///
    /// No-op when the gap already touches the end of storage (nothing after
    /// the cursor to delete). This is a forward delete, never a backspace.
    #[inline]
    pub fn delete_forward(&mut self) {
        if self.gap_end < self.buf.len() {
            // Zero the reclaimed byte so gap contents stay predictable.
            self.buf[self.gap_end] = 0;
            self.gap_end += 1;
        }
    }

    /// The content segments on either side of the gap, in order.
    #[inline]
    pub fn segments(&self) -> (&[u8], &[u8]) {
        (&self.buf[..self.gap_start], &self.buf[self.gap_end..])
    }

    /// Copy the line's content into a contiguous `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        let (left, right) = self.segments();
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(left);
        out.extend_from_slice(right);
        out
    }

    /// Regrow the storage, opening a fresh gap at the current edit point.
    fn grow(&mut self) {
        debug_assert_eq!(self.gap_start, self.gap_end);
        let growth = (self.len() / 2).max(GROW_MIN);
        let mut new_buf = vec![0u8; self.buf.len() + growth];

        new_buf[..self.gap_start].copy_from_slice(&self.buf[..self.gap_start]);
        new_buf[self.gap_start + growth..]
            .copy_from_slice(&self.buf[self.gap_end..]);

        self.buf = new_buf;
        self.gap_end = self.gap_start + growth;
    }
}

impl std::fmt::Debug for GapLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GapLine")
            .field("len", &self.len())
            .field("capacity", &self.buf.len())
            .field("gap_start", &self.gap_start)
            .field("gap_end", &self.gap_end)
            .finish()
    }
}
