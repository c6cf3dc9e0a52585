//! Client mode: flags in, passwords out.

mod context;
mod flags;
pub mod prompts;
mod quiet;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;

use crate::error::Result;

/// Parse `args` and generate. Help, version and usage errors exit through
/// clap.
pub fn run(args: Vec<String>) -> Result<()> {
    let flags = CliFlags::try_parse_from(args).unwrap_or_else(|e| e.exit());
    log::debug!("flags: {flags:?}");
    Context::new(flags).run()
}
