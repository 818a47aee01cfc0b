//! Cell: The atomic unit of terminal display.
//!
//! The editor is single-byte only, so a cell is just one display byte plus
//! an attribute flag set. Two bytes per cell keeps the grid compact and the
//! frame diff a straight memory walk.

use bitflags::bitflags;

bitflags! {
    /// Cell display attributes.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellAttrs: u8 {
        /// Reverse video (fg/bg swapped); used to draw the cursor.
        const REVERSE = 0b0000_0001;
    }
}

impl std::fmt::Debug for CellAttrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single terminal cell: one display byte and its attributes.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The byte to display. Printable ASCII in practice.
    ch: u8,
    /// Display attributes.
    attrs: CellAttrs,
}

impl Cell {
    /// A blank cell: space with no attributes.
    pub const BLANK: Self = Self {
        ch: b' ',
        attrs: CellAttrs::empty(),
    };

    /// A never-displayable sentinel cell (NUL byte).
    ///
    /// Filling the previously-emitted grid with this forces every visible
    /// cell, blanks included, to differ on the next diff, which is how a
    /// full redraw is requested after a resize.
    pub const NULL: Self = Self {
        ch: 0,
        attrs: CellAttrs::empty(),
    };

    /// Create a plain cell for a display byte.
    #[inline]
    pub const fn new(ch: u8) -> Self {
        Self {
            ch,
            attrs: CellAttrs::empty(),
        }
    }

    /// The display byte.
    #[inline]
    pub const fn ch(&self) -> u8 {
        self.ch
    }

    /// The display attributes.
    #[inline]
    pub const fn attrs(&self) -> CellAttrs {
        self.attrs
    }

    /// Check whether reverse video is set.
    #[inline]
    pub const fn is_reversed(&self) -> bool {
        self.attrs.contains(CellAttrs::REVERSE)
    }

    /// Set or clear reverse video.
    #[inline]
    pub fn set_reverse(&mut self, reverse: bool) {
        self.attrs.set(CellAttrs::REVERSE, reverse);
    }

    /// Set the attributes (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_attrs(mut self, attrs: CellAttrs) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({:?}, {:?})", self.ch as char, self.attrs)
    }
}
