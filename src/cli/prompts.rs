//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::pass::StrengthLevel;
use crate::terminal::{RED, RESET, YELLOW, strength_color};

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn no_classes() {
    warn("No character sets selected, nothing to generate.");
}

pub fn length_raised(requested: usize, effective: usize) {
    warn(&format!(
        "Length {requested} is shorter than the number of selected sets, using {effective}."
    ));
}

/// Print the strength rating to stderr - suppressed in quiet mode
pub fn strength(level: StrengthLevel) {
    if quiet::show_strength() {
        let color = strength_color(Some(level));
        eprintln!("Strength: {color}{level}{RESET}");
    }
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** -COPIED {count} PASSWORD(S) TO CLIPBOARD- ***");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    log::warn!("clipboard unavailable: {err}");
    error(&format!("Clipboard error: {err}"));
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
