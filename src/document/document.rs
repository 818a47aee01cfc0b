//! Document: An ordered sequence of gap-buffer lines plus the file handle
//! used for persistence.
//!
//! The document owns load and save; per-character access and mutation are
//! bounds-checked delegations to the addressed line. Out-of-range access is
//! never fatal: reads yield `None` and mutations are silent no-ops, so the
//! editing loop can probe boundaries without defensive pre-checks.

use super::error::{LoadError, SaveError};
use super::line::GapLine;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A loaded text file: one gap buffer per line.
///
/// # Invariants
///
/// - `line_count() >= 1` at all times after a successful open (an empty
///   file yields exactly one empty line).
/// - A line index is valid iff it is below `line_count()`; a column is
///   valid iff it is at most the line's length (the append position).
///
/// Dropping a document releases line storage and the file handle without
/// saving; persistence is always caller-initiated via [`Document::save`].
pub struct Document {
    /// The lines, in file order.
    lines: Vec<GapLine>,
    /// Backing file, held open read/write for the document's lifetime.
    file: File,
    /// Path the document was opened from (for diagnostics).
    path: PathBuf,
}

impl Document {
    /// Open a document, creating the file if it does not exist.
    ///
    /// The whole file is read and split into lines on line-feed bytes (the
    /// line feed itself is discarded). A non-empty file that does not end
    /// in a line feed still yields a final line for the trailing fragment;
    /// an empty file yields exactly one empty line.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();

        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(&path).map_err(|source| LoadError::Open {
            path: path.clone(),
            source,
        })?;

        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|source| LoadError::Read {
                path: path.clone(),
                source,
            })?;

        let lines = split_lines(&content);
        debug_assert!(!lines.is_empty());
        debug!(path = %path.display(), lines = lines.len(), bytes = content.len(), "document opened");

        Ok(Self { lines, file, path })
    }

    /// Path this document was opened from.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines in the document (always at least 1).
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get the byte at `(line, col)`.
    ///
    /// Returns `None` when either the line or the column is out of range.
    #[inline]
    pub fn char_at(&self, line: usize, col: usize) -> Option<u8> {
        self.lines.get(line)?.char_at(col)
    }

    /// Length of a line, or `None` for an out-of-range line index.
    #[inline]
    pub fn line_length(&self, line: usize) -> Option<usize> {
        self.lines.get(line).map(GapLine::len)
    }

    /// Place the edit cursor at `(line, col)`.
    ///
    /// The line index is clamped into `[0, line_count)` and the column is
    /// clamped by the line itself, matching cursor confinement at document
    /// edges. After this call the addressed line's gap sits at the edit
    /// point; callers are expected to `set_cursor` immediately before
    /// mutating.
    pub fn set_cursor(&mut self, line: usize, col: usize) {
        let line = line.min(self.lines.len() - 1);
        self.lines[line].set_cursor(col);
    }

    /// Insert a byte at the addressed line's current cursor.
    ///
    /// Out-of-range line indices are silent no-ops.
    #[inline]
    pub fn insert_char(&mut self, line: usize, byte: u8) {
        if let Some(l) = self.lines.get_mut(line) {
            l.insert(byte);
        }
    }

    /// Delete the character after the addressed line's cursor.
    ///
    /// Out-of-range line indices are silent no-ops.
    #[inline]
    pub fn delete_forward(&mut self, line: usize) {
        if let Some(l) = self.lines.get_mut(line) {
            l.delete_forward();
        }
    }

    /// Persist the document: truncate the backing file, write every line
    /// terminated by one line feed, and force the data to storage.
    ///
    /// A failed save leaves the in-memory document untouched; the caller
    /// decides whether to retry.
    pub fn save(&mut self) -> Result<(), SaveError> {
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(SaveError::Truncate)?;
        self.file.set_len(0).map_err(SaveError::Truncate)?;

        let mut written = 0usize;
        for line in &self.lines {
            let (left, right) = line.segments();
            self.file.write_all(left).map_err(SaveError::Write)?;
            self.file.write_all(right).map_err(SaveError::Write)?;
            self.file.write_all(b"\n").map_err(SaveError::Write)?;
            written += left.len() + right.len() + 1;
        }

        self.file.sync_all().map_err(SaveError::Sync)?;
        debug!(path = %self.path.display(), lines = self.lines.len(), bytes = written, "document saved");
        Ok(())
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("path", &self.path)
            .field("lines", &self.lines.len())
            .finish_non_exhaustive()
    }
}

/// Split file content into lines on `\n`, discarding the terminators.
///
/// Empty content yields one empty line; a trailing fragment without a
/// terminator still becomes a line.
fn split_lines(content: &[u8]) -> Vec<GapLine> {
    if content.is_empty() {
        return vec![GapLine::empty()];
    }

    let mut parts: Vec<&[u8]> = content.split(|&b| b == b'\n').collect();
    if content.ends_with(b"\n") {
        // The split produces one empty fragment past the final terminator.
        parts.pop();
    }
    parts.into_iter().map(GapLine::from_bytes).collect()
}
