//! Password generator with character set selection, a strength indicator
//! and clipboard copy.
//!
//! The core is [`pass::build`] and [`pass::classify`]; the interactive
//! widget ([`tui`]) and client mode ([`cli`]) hold the only mutable state
//! and call into it.

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod exits;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
