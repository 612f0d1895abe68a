//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Contents of a file under tests/fixtures.
pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {}: {}", path.display(), e))
}

/// A scratch vault holding one note and a settings file.
pub struct Vault {
    pub dir: TempDir,
}

impl Vault {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_note(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Settings file inside the vault; absent until `write_config` is called.
    pub fn config_path(&self) -> PathBuf {
        self.path().join("exhl").join("config.toml")
    }

    pub fn write_config(&self, toml: &str) -> PathBuf {
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, toml).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).unwrap()
    }
}
