//! Extract command handler

use anyhow::Result;
use std::path::Path;

use exhl::cli::NoteArgs;
use exhl::clipboard::{copy_text_to_clipboard, ClipboardError};
use exhl::Extractor;

use super::{extract_and_render, Note, Settings};

const NOTHING_FOUND: &str = "No highlights found";

/// Print the highlights of a note, optionally copying them to the clipboard.
///
/// Markdown (or JSON) goes to stdout; status messages go to stderr so the
/// output can be piped.
pub fn handle(config_path: &Path, args: &NoteArgs, json: bool, copy: bool) -> Result<()> {
    let mut settings = Settings::load(config_path)?;
    settings.apply(args);

    let extractor = Extractor::from_config(&settings.config);
    let note = Note::read(&args.file, args.title.as_deref())?;
    let bundle = extract_and_render(&settings, &extractor, &note, args.footnote_start)?;
    let markdown = bundle.rendered_markdown.as_deref().unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
    } else if !markdown.is_empty() {
        print!("{}", markdown);
    }

    if markdown.is_empty() {
        eprintln!("{}", NOTHING_FOUND);
        return Ok(());
    }

    if copy {
        match copy_text_to_clipboard(markdown) {
            Ok(result) => eprintln!("{}", result.message()),
            Err(ClipboardError::NothingToCopy) => eprintln!("{}", NOTHING_FOUND),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
