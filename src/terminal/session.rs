//! Terminal session: Scoped acquisition of the terminal.
//!
//! Raw mode, the alternate screen, and cursor visibility are acquired on
//! construction and restored on drop, so the terminal comes back in a
//! usable state on every exit path, panics included.

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use tracing::debug;

/// RAII guard over terminal state.
///
/// Owns the raw-mode/alternate-screen lifecycle; exactly one session should
/// exist at a time.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen, and hide the cursor.
    ///
    /// The editor draws its own cursor by reversing the cell under it, so
    /// the hardware cursor stays hidden for the whole session.
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        debug!("terminal session acquired");
        Ok(Self { _private: () })
    }

    /// Current terminal size as `(width, height)` in character cells.
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        debug!("terminal session released");
    }
}
