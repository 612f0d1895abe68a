//! Linux xclip clipboard tool.

use super::{command_exists, pipe_text};
use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Linux X11 clipboard tool using xclip.
pub struct Xclip;

impl Xclip {
    pub fn new() -> Self {
        Self
    }

    /// Arguments selecting the CLIPBOARD selection rather than PRIMARY.
    pub const ARGS: [&'static str; 2] = ["-selection", "clipboard"];
}

impl CopyTool for Xclip {
    fn method(&self) -> CopyMethod {
        CopyMethod::Xclip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && command_exists("xclip")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text("xclip", &Self::ARGS, text)
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
