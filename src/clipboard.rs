//! System clipboard output.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroizing;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ClipboardError(String);

/// Put `text` on the clipboard. A single trailing newline is dropped.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut ctx = ClipboardContext::new().map_err(|e| ClipboardError(e.to_string()))?;
    let text = text.strip_suffix('\n').unwrap_or(text);
    ctx.set_contents(text.to_owned())
        .map_err(|e| ClipboardError(e.to_string()))?;

    // Wipe the read-back copy.
    if let Ok(retrieved) = ctx.get_contents() {
        drop(Zeroizing::new(retrieved));
    }
    tracing::debug!(chars = text.len(), "copied to clipboard");
    Ok(())
}
