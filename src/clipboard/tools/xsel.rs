//! Linux xsel clipboard tool.

use super::{command_exists, pipe_text};
use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

pub struct Xsel;

impl Xsel {
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Xsel {
    fn method(&self) -> CopyMethod {
        CopyMethod::Xsel
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && command_exists("xsel")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text("xsel", &["--clipboard", "--input"], text)
    }
}

impl Default for Xsel {
    fn default() -> Self {
        Self::new()
    }
}
