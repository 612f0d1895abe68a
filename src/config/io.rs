//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use super::State;

/// Get the config file path (~/.config/exhl/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Get the config directory path (~/.config/exhl)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("exhl"))
}

/// Load configuration from a file, or return defaults if it doesn't exist
pub fn load_from(config_path: &Path) -> Result<Config> {
    if config_path.exists() {
        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        Ok(config)
    } else {
        Ok(Config::default())
    }
}

/// Save configuration to a file
pub fn save_to(config: &Config, config_path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    write_creating_parent(config_path, &contents)
        .with_context(|| format!("Failed to write config file: {:?}", config_path))
}

/// Load the footnote state stored next to the config file
pub fn load_state(state_path: &Path) -> Result<State> {
    if !state_path.exists() {
        return Ok(State::default());
    }
    let contents = fs::read_to_string(state_path)
        .with_context(|| format!("Failed to read state file: {:?}", state_path))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse state file: {:?}", state_path))
}

/// Persist the footnote state
pub fn save_state(state: &State, state_path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(state).context("Failed to serialize state")?;
    write_creating_parent(state_path, &contents)
        .with_context(|| format!("Failed to write state file: {:?}", state_path))
}

fn write_creating_parent(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}
