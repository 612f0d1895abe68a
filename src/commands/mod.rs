//! Command handlers for the exhl CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod explode;
pub mod extract;
pub mod property;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use exhl::cli::NoteArgs;
use exhl::highlights::RenderOptions;
use exhl::{Config, Extractor, ResultBundle, State};

/// Loaded settings and the file they came from.
pub struct Settings {
    pub config: Config,
    pub config_path: PathBuf,
}

impl Settings {
    pub fn load(config_path: &Path) -> Result<Self> {
        Ok(Self {
            config: Config::load_from(config_path)?,
            config_path: config_path.to_path_buf(),
        })
    }

    /// Turn on output features requested on the command line.
    pub fn apply(&mut self, args: &NoteArgs) {
        self.config.output.links |= args.links;
        self.config.output.footnotes |= args.footnotes;
    }

    pub fn state_path(&self) -> PathBuf {
        State::path_for(&self.config_path)
    }
}

/// A note read from disk.
pub struct Note {
    pub path: PathBuf,
    pub text: String,
    pub title: String,
}

impl Note {
    /// Read a note; the title defaults to the file stem.
    pub fn read(path: &Path, title: Option<&str>) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read note: {}", path.display()))?;
        let title = match title {
            Some(t) => t.to_string(),
            None => note_title(path),
        };
        Ok(Self {
            path: path.to_path_buf(),
            text,
            title,
        })
    }

    /// Directory the note lives in.
    pub fn folder(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Title of a note as it is linked: the file name without extension.
pub fn note_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Extract a note and render it, advancing the stored footnote counter.
///
/// `footnote_start` replaces the stored counter for this run. The counter is
/// only written back when footnotes were actually rendered.
pub fn extract_and_render(
    settings: &Settings,
    extractor: &Extractor,
    note: &Note,
    footnote_start: Option<u32>,
) -> Result<ResultBundle> {
    let output = &settings.config.output;
    let state_path = settings.state_path();
    let first = match footnote_start {
        Some(n) => n,
        None => State::load(&state_path)?.next_footnote,
    };

    let mut bundle = extractor.extract(&note.text);
    let options = RenderOptions {
        links: output.links,
        footnotes: output.footnotes,
        headline: output.headline_template(),
        title: Some(&note.title),
    };
    let next = bundle.render(&options, first);
    debug!(highlights = bundle.highlights.len(), first, next, "rendered note");

    if next != first {
        State {
            next_footnote: next,
        }
        .save(&state_path)?;
    }
    Ok(bundle)
}
