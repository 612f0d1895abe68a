//! Concrete clipboard tools.

mod pbcopy;
mod wl_copy;
mod xclip;
mod xsel;

pub use pbcopy::Pbcopy;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::Write;
use std::process::{Command, Stdio};

use super::tool::{CopyTool, CopyToolError};

/// Tools for the current platform, in the order they are tried.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    if cfg!(target_os = "macos") {
        vec![Box::new(Pbcopy::new())]
    } else if cfg!(target_os = "linux") {
        vec![
            Box::new(WlCopy::new()),
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
        ]
    } else {
        Vec::new()
    }
}

/// Check if an executable is on the PATH.
pub(crate) fn command_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run `program` and write `text` to its stdin.
pub(crate) fn pipe_text(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;
        // stdin drops here so the tool sees EOF
    }

    let output = child
        .wait_with_output()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(CopyToolError::Failed(if stderr.is_empty() {
            format!("{} failed", program)
        } else {
            stderr
        }))
    }
}
