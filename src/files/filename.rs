//! Link identifiers and note filenames derived from highlight text.
//!
//! A link id is the highlight with the characters that are not allowed in
//! note names removed. It doubles as the `[[wiki link]]` target and as the
//! name of the companion note, so both must be derived the same way.

use thiserror::Error;

/// Characters removed from link ids: reserved in note paths on common filesystems.
const RESERVED_CHARS: &[char] = &['*', '"', '\\', '/', '<', '>', ':', '?'];

/// Link ids longer than this are truncated.
pub const MAX_LINK_ID_LENGTH: usize = 100;

/// Characters kept before the ellipsis when truncating.
const TRUNCATED_LENGTH: usize = MAX_LINK_ID_LENGTH - 1;

const ELLIPSIS: &str = "...";

/// Extension of companion notes.
pub const NOTE_EXTENSION: &str = "md";

/// Maximum filename length for most filesystems (bytes).
const MAX_FILENAME_LENGTH: usize = 255;

/// Derive a link id from cleaned highlight text.
///
/// Removes `* " \ / < > : ?`, trims, and when more than 100 characters remain
/// keeps the first 99 followed by `...`. Lengths count characters, not bytes.
pub fn link_id(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !RESERVED_CHARS.contains(c)).collect();
    truncate_with_ellipsis(stripped.trim())
}

fn truncate_with_ellipsis(s: &str) -> String {
    if s.chars().count() <= MAX_LINK_ID_LENGTH {
        return s.to_string();
    }
    let kept: String = s.chars().take(TRUNCATED_LENGTH).collect();
    format!("{}{}", kept, ELLIPSIS)
}

/// Filename of the note a link id points to (`<link id>.md`).
pub fn note_file_name(link_id: &str) -> Result<String, FilenameError> {
    if link_id.trim().is_empty() {
        return Err(FilenameError::Empty);
    }
    let filename = format!("{}.{}", link_id, NOTE_EXTENSION);
    validate_length(&filename)?;
    Ok(filename)
}

/// Validates that a filename doesn't exceed filesystem limits.
pub fn validate_length(filename: &str) -> Result<(), FilenameError> {
    if filename.len() > MAX_FILENAME_LENGTH {
        Err(FilenameError::TooLong {
            length: filename.len(),
            max: MAX_FILENAME_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Errors that can occur during filename operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilenameError {
    #[error("Filename is empty after removing reserved characters")]
    Empty,

    #[error("Filename too long: {length} bytes (max {max})")]
    TooLong { length: usize, max: usize },
}
