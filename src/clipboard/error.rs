//! Clipboard operation errors.

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No highlights found")]
    NothingToCopy,

    #[error("No clipboard tool available. On Linux, install xclip, xsel, or wl-copy.")]
    NoToolAvailable,

    #[error("Platform not supported (only macOS and Linux)")]
    UnsupportedPlatform,
}
