//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const REVERSE: &str = "\x1b[7m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any styling.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}{SHOW_CURSOR}");
    flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;

/// ┌─ Title ───────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content               │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    println!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    );
}

/// Left and right aligned on one line: │ left          right │
pub fn box_line_split(left: &str, right: &str) {
    let inner_width = BOX_WIDTH - 4;
    let gap = inner_width.saturating_sub(console_width(left) + console_width(right));
    println!("│ {}{}{} │", left, " ".repeat(gap), right);
}

pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width(&format!("{HIDE_CURSOR}[x]")), 3);
        assert_eq!(console_width("│ é"), 3);
    }
}
