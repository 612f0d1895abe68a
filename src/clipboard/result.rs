//! Outcome of a successful copy.

use std::fmt;

/// The tool that ended up holding the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Pbcopy,
    WlCopy,
    Xclip,
    Xsel,
}

impl CopyMethod {
    /// Executable name of the tool.
    pub fn command(self) -> &'static str {
        match self {
            CopyMethod::Pbcopy => "pbcopy",
            CopyMethod::WlCopy => "wl-copy",
            CopyMethod::Xclip => "xclip",
            CopyMethod::Xsel => "xsel",
        }
    }
}

impl fmt::Display for CopyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub method: CopyMethod,
    /// Bytes handed to the tool
    pub size: usize,
}

impl CopyResult {
    pub fn copied(method: CopyMethod, size: usize) -> Self {
        Self { method, size }
    }

    /// Message shown to the user after copying highlights.
    pub fn message(&self) -> &'static str {
        "Highlights copied to clipboard!"
    }
}
