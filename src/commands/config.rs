//! Config subcommands handler

use anyhow::{bail, Context, Result};
use std::path::Path;

use exhl::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    print!("{}", render(&config)?);
    Ok(())
}

fn render(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}

/// Open the configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi'). A missing file is
/// created with the defaults first.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        Config::default().save_to(config_path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    let status = std::process::Command::new(&editor)
        .arg(config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;
    if !status.success() {
        bail!("Editor exited with {}", status);
    }

    // Catch mistakes while the user still remembers the edit
    Config::load_from(config_path)?;
    Ok(())
}

/// Print the configuration file path.
pub fn handle_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}
