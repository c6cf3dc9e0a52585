//! Terminal output utilities.
//!
//! Box drawing, slider bar, strength colors, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use crate::pass::StrengthLevel;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREY: &str = "\x1b[38;5;250m";

/// Indicator color: grey until something has been generated.
pub fn strength_color(level: Option<StrengthLevel>) -> &'static str {
    match level {
        None => GREY,
        Some(StrengthLevel::Weak) => RED,
        Some(StrengthLevel::Medium) => YELLOW,
        Some(StrengthLevel::Strong) => GREEN,
    }
}

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

pub fn hide_cursor() {
    print!("\x1b[?25l");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    print!("├{}┤\r\n", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing (raw-mode safe: every line ends in \r\n)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        print!("┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - console_width(&title_part);
        print!("┌{}{}┐\r\n", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        print!("│ {}{} │\r\n", content, " ".repeat(padding));
    } else {
        print!("│ {} │\r\n", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        print!(
            "│ {}{}{} │\r\n",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        print!("│ {} │\r\n", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    print!("└{}┘\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Print a key binding with its description.
pub fn box_opt(key: &str, desc: &str) {
    let key_col = 14;
    let key_padded = format!("{:<width$}", key, width = key_col);
    box_line(&format!("{key_padded}{desc}"));
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Slider
// ============================================================================

/// Render a slider track `width` cells wide with `filled` cells highlighted.
pub fn slider_bar(filled: usize, width: usize) -> String {
    let filled = filled.min(width);
    let knob = if filled == width { "" } else { "●" };
    let rest = width.saturating_sub(filled + knob.chars().count());
    format!(
        "{GREEN}{}{RESET}{BOLD}{knob}{RESET}{DIM}{}{RESET}",
        "━".repeat(filled),
        "─".repeat(rest)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_skips_escapes() {
        assert_eq!(console_width("abc"), 3);
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("┌─┐"), 3);
    }

    #[test]
    fn slider_bar_keeps_width() {
        for filled in 0..=20 {
            assert_eq!(console_width(&slider_bar(filled, 20)), 20, "filled={filled}");
        }
        assert_eq!(console_width(&slider_bar(99, 20)), 20);
    }

    #[test]
    fn indicator_colors() {
        assert_eq!(strength_color(None), GREY);
        assert_eq!(strength_color(Some(StrengthLevel::Weak)), RED);
        assert_eq!(strength_color(Some(StrengthLevel::Medium)), YELLOW);
        assert_eq!(strength_color(Some(StrengthLevel::Strong)), GREEN);
    }
}
