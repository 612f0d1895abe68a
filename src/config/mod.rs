//! Configuration management for exhl
//!
//! Settings live in `~/.config/exhl/config.toml`; the footnote counter that
//! survives between runs lives next to it in `state.toml`.

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/exhl/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/exhl)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from an explicit path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Expand ~ in the companion note directory
    pub fn explode_directory(&self) -> PathBuf {
        let dir = &self.explode.directory;
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }
}

/// Values carried from one run to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Number the next rendered footnote receives
    #[serde(default = "default_next_footnote")]
    pub next_footnote: u32,
}

fn default_next_footnote() -> u32 {
    1
}

impl Default for State {
    fn default() -> Self {
        Self {
            next_footnote: default_next_footnote(),
        }
    }
}

impl State {
    /// State file that sits next to the given config file
    pub fn path_for(config_path: &Path) -> PathBuf {
        config_path.with_file_name("state.toml")
    }

    pub fn load(path: &Path) -> Result<Self> {
        io::load_state(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_state(self, path)
    }
}
