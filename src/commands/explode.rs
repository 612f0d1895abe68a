//! Explode command handler

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use exhl::files::notes::{self, index_file_name};
use exhl::files::DirectoryStore;
use exhl::Extractor;

use super::{extract_and_render, Note, Settings};

/// Create a companion note per highlight, plus an optional index note.
pub fn handle(
    config_path: &Path,
    file: &Path,
    title: Option<&str>,
    dir: Option<&Path>,
    index: bool,
) -> Result<()> {
    let mut settings = Settings::load(config_path)?;
    // Companion notes are named after link ids
    settings.config.output.links = true;

    let extractor = Extractor::from_config(&settings.config);
    let note = Note::read(file, title)?;
    let bundle = extract_and_render(&settings, &extractor, &note, None)?;

    if bundle.is_empty() {
        println!("No highlights found");
        return Ok(());
    }

    let target = match dir {
        Some(dir) => dir.to_path_buf(),
        None => settings.config.explode_directory(),
    };
    let store = DirectoryStore::new(resolve_against(note.folder(), &target));

    let report = notes::explode(&bundle, &note.title, &store)
        .with_context(|| format!("Failed to create notes in {}", store.root().display()))?;
    for name in &report.created {
        println!("Created {}", name);
    }
    if !report.skipped.is_empty() {
        println!("Skipped {} existing note(s)", report.skipped.len());
    }
    for text in &report.invalid {
        eprintln!("Warning: no usable note name for highlight: {}", text);
    }

    if index {
        let markdown = bundle.rendered_markdown.as_deref().unwrap_or_default();
        if notes::write_index(markdown, &note.title, &store)? {
            println!("Created {}", index_file_name(&note.title));
        } else {
            println!("Skipped existing {}", index_file_name(&note.title));
        }
    }
    Ok(())
}

/// Relative directories are taken relative to the source note's folder.
fn resolve_against(folder: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        folder.join(dir)
    }
}
