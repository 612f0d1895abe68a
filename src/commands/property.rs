//! Property command handler

use anyhow::Result;
use std::path::Path;

use exhl::cli::NoteArgs;
use exhl::files::frontmatter;
use exhl::Extractor;

use super::{extract_and_render, Note, Settings};

/// Store the rendered highlights in a frontmatter property of the note.
///
/// A note without highlights is left untouched.
pub fn handle(config_path: &Path, args: &NoteArgs, name: Option<&str>) -> Result<()> {
    let mut settings = Settings::load(config_path)?;
    settings.apply(args);

    let extractor = Extractor::from_config(&settings.config);
    let note = Note::read(&args.file, args.title.as_deref())?;
    let bundle = extract_and_render(&settings, &extractor, &note, args.footnote_start)?;
    let markdown = bundle.rendered_markdown.as_deref().unwrap_or_default();

    if markdown.is_empty() {
        println!("No highlights found");
        return Ok(());
    }

    let property = name.unwrap_or(&settings.config.output.property);
    let existed = frontmatter::write_property(&note.path, property, markdown)?;
    if existed {
        println!("Highlights property was updated.");
    } else {
        println!("Highlights added as property!");
    }
    Ok(())
}
