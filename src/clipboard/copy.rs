//! Copy orchestrator for clipboard operations.

use tracing::{debug, warn};

use super::error::ClipboardError;
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;

/// Orchestrates clipboard copy operations using available tools.
///
/// Tools are tried in order until one succeeds.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &[Box<dyn CopyTool>] {
        &self.tools
    }

    /// Copy text to the clipboard.
    ///
    /// Empty text is refused; there is nothing worth replacing the clipboard with.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::NothingToCopy);
        }
        if self.tools.is_empty() {
            return Err(ClipboardError::UnsupportedPlatform);
        }

        let mut last_error: Option<String> = None;
        for tool in self.tools.iter().filter(|t| t.is_available()) {
            match tool.try_copy_text(text) {
                Ok(()) => {
                    debug!(tool = tool.name(), bytes = text.len(), "copied to clipboard");
                    return Ok(CopyResult::copied(tool.method(), text.len()));
                }
                Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(msg)) => {
                    warn!(tool = tool.name(), error = %msg, "clipboard tool failed, trying next");
                    last_error = Some(msg);
                }
            }
        }

        if let Some(err) = last_error {
            debug!(error = %err, "all clipboard tools failed");
        }
        Err(ClipboardError::NoToolAvailable)
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
