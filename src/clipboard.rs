//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Copy `text` to the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    // Some providers only hand the data over once it has been read back.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
