//! Raw mode RAII guard for the interactive widget.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

use super::{flush, hide_cursor};

/// Holds the terminal in raw mode with the cursor hidden. Both are restored
/// on drop, including on early return through `?`.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        hide_cursor();
        Ok(Self { active: true })
    }

    /// Restore the terminal now instead of at drop.
    pub fn release(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            print!("\x1b[?25h");
            flush();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
