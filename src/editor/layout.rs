//! Layout math: Mapping document columns to screen rows and columns.
//!
//! Wrapping is a display-time concern only; nothing here touches document
//! storage. The text area is the screen minus a fixed-width line-number
//! gutter. A column at an exact multiple of the text width belongs to the
//! NEXT visual row (`col / max_chars`), which keeps the cursor's append
//! position on a fresh row when a line exactly fills its last row.

/// Usable text columns for a given screen and gutter width.
///
/// Never less than 1, so layout arithmetic stays well-defined on absurdly
/// narrow terminals.
#[inline]
pub fn text_width(screen_width: u16, gutter_width: u16) -> usize {
    (screen_width.saturating_sub(gutter_width) as usize).max(1)
}

/// Number of visual rows a line of `len` characters occupies.
///
/// An empty line still occupies one row.
#[inline]
pub const fn visual_rows(len: usize, max_chars: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(max_chars)
    }
}

/// Visual row of a column within its own line.
#[inline]
pub const fn row_within_line(col: usize, max_chars: usize) -> usize {
    col / max_chars
}

/// Screen column of a document column, including the gutter offset.
#[inline]
pub const fn screen_column(col: usize, max_chars: usize, gutter_width: u16) -> usize {
    gutter_width as usize + (col % max_chars)
}
