//! The seam between the copy orchestrator and concrete clipboard tools.

use super::result::CopyMethod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// The executable is not installed
    NotFound,
    /// The tool ran and failed
    Failed(String),
}

/// A clipboard tool that accepts text on stdin.
pub trait CopyTool {
    fn method(&self) -> CopyMethod;

    fn name(&self) -> &'static str {
        self.method().command()
    }

    /// Whether the tool can run on this machine.
    fn is_available(&self) -> bool;

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}
