//! Document module: Gap-buffer text storage.
//!
//! This module contains:
//! - [`GapLine`]: A single line stored as a gap buffer
//! - [`Document`]: An ordered sequence of lines plus the backing file
//! - [`LoadError`] / [`SaveError`]: The persistence error taxonomy

mod error;
mod line;
#[allow(clippy::module_inception)]
mod document;

pub use document::Document;
pub use error::{LoadError, SaveError};
pub use line::GapLine;
