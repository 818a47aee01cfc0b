//! Error types for document load and persistence.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A document could not be opened or read.
///
/// Fatal to startup: the caller should abort the session.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path could not be opened (or created).
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The file contents could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// A document could not be persisted.
///
/// Must be surfaced to the user rather than retried automatically; the
/// in-memory document is left intact so the caller can retry a save.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The backing file could not be truncated before rewriting.
    #[error("failed to truncate file: {0}")]
    Truncate(#[source] io::Error),

    /// Line content could not be fully written.
    #[error("failed to write file: {0}")]
    Write(#[source] io::Error),

    /// The written data could not be forced to storage.
    #[error("failed to sync file: {0}")]
    Sync(#[source] io::Error),
}
