//! Clipboard collaborator
//!
//! Copy failures are reported back to the caller and never end the game.

/// Error type for clipboard writes
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available on this platform")]
    Unsupported,
    #[cfg(not(target_os = "android"))]
    #[error("failed to write to clipboard: {0}")]
    Write(#[from] arboard::Error),
}

/// Copy text to the system clipboard
///
/// # Errors
///
/// Returns `ClipboardError` if no clipboard is reachable (headless session,
/// missing display server) or the write is refused.
#[cfg(not(target_os = "android"))]
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    tracing::debug!(bytes = text.len(), "copied text to clipboard");
    Ok(())
}

/// Copy text to the system clipboard
///
/// # Errors
///
/// Always returns `ClipboardError::Unsupported` on this platform.
#[cfg(target_os = "android")]
pub fn copy_to_clipboard(_text: &str) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unsupported)
}
