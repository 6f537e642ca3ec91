//! Raw mode RAII guard and key reading.

use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::{HIDE_CURSOR, SHOW_CURSOR, flush};

/// Raw mode with a hidden cursor, both undone on drop.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        print!("{HIDE_CURSOR}");
        flush();
        Ok(Self { active: true })
    }

    pub fn disable(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            print!("{SHOW_CURSOR}");
            flush();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}

/// Block until the next key press. Raw mode is held only while waiting,
/// so callers can render with ordinary line output.
pub fn read_key() -> io::Result<KeyEvent> {
    let _guard = RawModeGuard::new()?;
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(key);
        }
    }
}
