//! CLI context - bundles settings and flags.

use std::io::{self, Write};

use rand::Rng;
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::clipboard;
use crate::error::Result;
use crate::pass::{self, GenerationRequest};
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let mut settings = Settings {
            classes: flags.classes(),
            to_clipboard: flags.board,
            ..Default::default()
        };

        // Flags are not bound by the widget's slider.
        if let Some(len) = flags.length {
            settings.pass_length = usize::try_from(len).unwrap_or(usize::MAX);
        }
        if let Some(num) = flags.number {
            settings.number_of_passwords = usize::try_from(num).unwrap_or(usize::MAX);
        }

        Self { settings, flags }
    }

    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.flags.quiet);

        let Some(request) = self.settings.request() else {
            prompts::no_classes();
            return Ok(());
        };
        if request.length() != self.settings.pass_length {
            prompts::length_raised(self.settings.pass_length, request.length());
        }

        let mut rng = pass::seeded_rng()?;
        self.generate_output(&request, &mut rng)?;
        prompts::strength(pass::classify(request.classes(), request.length()));
        Ok(())
    }

    /// Generate passwords and send them to the clipboard or stdout.
    fn generate_output<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<()> {
        let count = self.settings.number_of_passwords.max(1);

        if !self.settings.to_clipboard {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            return write_passwords(request, count, rng, &mut out);
        }

        let mut buf = Vec::new();
        write_passwords(request, count, rng, &mut buf)?;
        let result = self.deliver_to_clipboard(&buf, count);
        buf.zeroize();
        result
    }

    fn deliver_to_clipboard(&self, buf: &[u8], count: usize) -> Result<()> {
        // Passwords are ASCII, so this never fails.
        let text = std::str::from_utf8(buf).unwrap_or_default();

        // No trailing newline in the clipboard.
        match clipboard::copy(text.trim_end_matches('\n')) {
            Ok(()) => {
                prompts::clipboard_copied(count);
                Ok(())
            }
            Err(e) => {
                prompts::clipboard_error(&e.to_string());
                if prompts::clipboard_fallback_prompt() {
                    let stdout = io::stdout();
                    let mut out = stdout.lock();
                    out.write_all(buf)?;
                    out.flush()?;
                }
                Ok(())
            }
        }
    }
}

/// Write `count` passwords to `out`, one per line, as they are built.
fn write_passwords<R, W>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
    out: &mut W,
) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    for _ in 0..count {
        let pass = pass::build(request, rng);
        out.write_all(pass.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
