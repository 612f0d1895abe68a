//! Clipboard support for copying rendered highlights.
//!
//! Text is piped to whichever platform tool is installed: `pbcopy` on macOS,
//! `wl-copy`, `xclip` or `xsel` on Linux.
//!
//! # Example
//!
//! ```ignore
//! use exhl::clipboard::copy_text_to_clipboard;
//!
//! let result = copy_text_to_clipboard("- a highlight\n")?;
//! println!("{}", result.message());
//! ```

pub mod copy;
mod error;
mod result;
pub mod tool;
pub mod tools;

pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};

use copy::Copy;

/// Copy text to the system clipboard.
///
/// # Errors
/// - `ClipboardError::NothingToCopy` - text is empty
/// - `ClipboardError::NoToolAvailable` - no clipboard tool found
/// - `ClipboardError::UnsupportedPlatform` - not macOS or Linux
pub fn copy_text_to_clipboard(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}
