//! Screen module: Core data structures for the double-buffer rendering
//! system.
//!
//! This module contains:
//! - [`Cell`]: The atomic unit of display (one byte plus attributes)
//! - [`Grid`]: A matrix of cells representing one frame
//! - [`Screen`]: The double-buffered frame composer
//! - [`diff`]: The diffing engine that emits minimal ANSI sequences

mod cell;
pub mod diff;
mod grid;
#[allow(clippy::module_inception)]
mod screen;

pub use cell::{Cell, CellAttrs};
pub use diff::{DiffState, DiffStats};
pub use grid::Grid;
pub use screen::Screen;
