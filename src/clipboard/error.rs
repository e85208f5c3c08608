//! Clipboard operation errors.

use super::method::ClipboardMethod;

/// Errors that can occur while reading or writing the system clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error(
        "No clipboard tool available. On macOS osascript is required; on Linux install wl-clipboard or xclip."
    )]
    NoToolAvailable,

    #[error("Clipboard tool {tool} failed: {message}")]
    ToolFailed {
        tool: ClipboardMethod,
        message: String,
    },
}
