//! macOS pasteboard tool.

use super::pipe_text;
use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Copies text with `pbcopy`, which ships with every macOS install.
pub struct Pbcopy;

impl Pbcopy {
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Pbcopy {
    fn method(&self) -> CopyMethod {
        CopyMethod::Pbcopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text("pbcopy", &[], text)
    }
}

impl Default for Pbcopy {
    fn default() -> Self {
        Self::new()
    }
}
