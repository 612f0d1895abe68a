//! Companion notes created from highlights.
//!
//! Each highlight with a link id can be "exploded" into a note of its own
//! named after the link id. The note quotes the highlight and points back to
//! the source note with a footnote. Existing notes are never overwritten.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::filename::{self, FilenameError};
use crate::highlights::{Highlight, ResultBundle};

#[derive(Debug, Error)]
pub enum NoteStoreError {
    #[error("Invalid note name: {0}")]
    InvalidName(#[from] FilenameError),

    #[error("Failed to write note {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where companion notes are written.
pub trait NoteStore {
    /// Whether a note with this filename already exists.
    fn exists(&self, name: &str) -> bool;

    /// Create a note. Must not replace an existing one.
    fn create(&self, name: &str, body: &str) -> Result<(), NoteStoreError>;
}

/// Notes stored as files in one directory.
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl NoteStore for DirectoryStore {
    fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    fn create(&self, name: &str, body: &str) -> Result<(), NoteStoreError> {
        let path = self.path_for(name);
        let io_err = |source: io::Error| NoteStoreError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.root).map_err(io_err)?;
        // create_new refuses to clobber a note created since the exists() check
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(io_err)?;
        file.write_all(body.as_bytes()).map_err(io_err)?;
        Ok(())
    }
}

/// What happened to each companion note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplodeReport {
    pub created: Vec<String>,
    /// Notes that already existed and were left alone
    pub skipped: Vec<String>,
    /// Highlights whose link id cannot be used as a filename
    pub invalid: Vec<String>,
}

/// Body of a companion note: the quote plus a footnote back to the source.
pub fn companion_body(quote: &str, source_title: &str) -> String {
    format!("## Source\n> {}[^1]\n\n[^1]: [[{}]]\n", quote, source_title)
}

/// Body of the index note listing every highlight of a source note.
pub fn index_body(rendered: &str, source_title: &str) -> String {
    format!("{}## Source\n- [[{}]]\n", rendered, source_title)
}

/// Filename of the index note for a source note.
pub fn index_file_name(source_title: &str) -> String {
    format!("Highlights for {}.{}", source_title, filename::NOTE_EXTENSION)
}

/// The text quoted in a companion note: the enclosing line when contexts were
/// collected, the highlight otherwise.
fn quote_for(highlight: &Highlight) -> &str {
    highlight.context.as_deref().unwrap_or(&highlight.text)
}

/// Create one companion note per highlight.
///
/// Highlights without a link id are ignored. A note that already exists is
/// reported as skipped; the first write error stops the run.
pub fn explode(
    bundle: &ResultBundle,
    source_title: &str,
    store: &dyn NoteStore,
) -> Result<ExplodeReport, NoteStoreError> {
    let mut report = ExplodeReport::default();

    for highlight in &bundle.highlights {
        let Some(link_id) = highlight.link_id.as_deref() else {
            continue;
        };
        let name = match filename::note_file_name(link_id) {
            Ok(name) => name,
            Err(e) => {
                debug!(link_id, error = %e, "skipping highlight without usable note name");
                report.invalid.push(highlight.text.clone());
                continue;
            }
        };

        if store.exists(&name) || report.created.contains(&name) {
            report.skipped.push(name);
            continue;
        }

        store.create(&name, &companion_body(quote_for(highlight), source_title))?;
        info!(note = %name, "created companion note");
        report.created.push(name);
    }

    Ok(report)
}

/// Write the index note unless it exists. Returns whether it was created.
pub fn write_index(
    rendered: &str,
    source_title: &str,
    store: &dyn NoteStore,
) -> Result<bool, NoteStoreError> {
    let name = index_file_name(source_title);
    filename::validate_length(&name)?;
    if store.exists(&name) {
        return Ok(false);
    }
    store.create(&name, &index_body(rendered, source_title))?;
    Ok(true)
}
