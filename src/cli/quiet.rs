//! Quiet mode for client output.
//!
//! With `-q` only the passwords reach stdout: warnings, the strength line
//! and clipboard confirmations are dropped. Prompts are also skipped when
//! stdin is not a terminal, so piped runs never block.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Set once from the parsed flags, before anything is printed.
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

/// Whether informational output (warnings, strength, confirmations) is
/// suppressed.
pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether the strength rating should follow the generated passwords.
pub fn show_strength() -> bool {
    !enabled()
}

fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Answer prompts with their default instead of reading stdin.
pub fn skip_prompt() -> bool {
    enabled() || !stdin_is_tty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_hides_strength_and_prompts() {
        set(true);
        assert!(enabled());
        assert!(!show_strength());
        assert!(skip_prompt());

        set(false);
        assert!(!enabled());
        assert!(show_strength());
    }
}
