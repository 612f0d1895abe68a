//! YAML frontmatter editing.
//!
//! Notes may start with a `---` delimited YAML block. Highlights are stored as
//! one property of that block; every other key is kept as parsed.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;

const DELIMITER: &str = "---";

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("Adding property failed. Malformed frontmatter:\n\n{message}")]
    Malformed { message: String },

    #[error("Failed to serialize frontmatter: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A note split into its frontmatter and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// YAML between the delimiters, `None` when the note has no block
    pub yaml: Option<&'a str>,
    pub body: &'a str,
}

/// Result of setting a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyUpdate {
    /// The full note with the updated frontmatter
    pub content: String,
    /// Whether the property was already present
    pub existed: bool,
}

/// Split a note into frontmatter and body.
///
/// The block must open on the first line and close on a line holding only
/// `---`. An opening delimiter without a closing one is an error.
pub fn split(note: &str) -> Result<Split<'_>, FrontmatterError> {
    let Some(rest) = strip_delimiter_line(note) else {
        return Ok(Split {
            yaml: None,
            body: note,
        });
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            return Ok(Split {
                yaml: Some(&rest[..offset]),
                body: &rest[offset + line.len()..],
            });
        }
        offset += line.len();
    }

    Err(FrontmatterError::Malformed {
        message: "frontmatter block is not closed with ---".to_string(),
    })
}

fn strip_delimiter_line(note: &str) -> Option<&str> {
    let rest = note.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Set `key` to `value` in the note's frontmatter, creating the block if needed.
pub fn set_property(note: &str, key: &str, value: &str) -> Result<PropertyUpdate, FrontmatterError> {
    let split = split(note)?;
    let mut mapping = match split.yaml {
        Some(yaml) => parse_mapping(yaml)?,
        None => Mapping::new(),
    };

    let existed = mapping.contains_key(key);
    mapping.insert(Value::String(key.to_string()), Value::String(value.to_string()));

    let yaml = serde_yaml::to_string(&Value::Mapping(mapping))?;
    Ok(PropertyUpdate {
        content: format!("{DELIMITER}\n{yaml}{DELIMITER}\n{}", split.body),
        existed,
    })
}

fn parse_mapping(yaml: &str) -> Result<Mapping, FrontmatterError> {
    let value: Value = serde_yaml::from_str(yaml).map_err(|e| FrontmatterError::Malformed {
        message: e.to_string(),
    })?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(FrontmatterError::Malformed {
            message: "frontmatter is not a key/value mapping".to_string(),
        }),
    }
}

/// Read a property as a string, if present.
pub fn get_property(note: &str, key: &str) -> Result<Option<String>, FrontmatterError> {
    let Some(yaml) = split(note)?.yaml else {
        return Ok(None);
    };
    let mapping = parse_mapping(yaml)?;
    Ok(mapping
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string))
}

/// Set a property in a note on disk.
///
/// The file is only replaced once the new content is complete; on any error
/// it is left as it was. Returns whether the property already existed.
pub fn write_property(path: &Path, key: &str, value: &str) -> Result<bool, FrontmatterError> {
    let io_err = |source: std::io::Error| FrontmatterError::Io {
        path: path.to_path_buf(),
        source,
    };

    let note = fs::read_to_string(path).map_err(io_err)?;
    let update = set_property(&note, key, value)?;

    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp_path = PathBuf::from(temp);

    fs::write(&temp_path, &update.content).map_err(io_err)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_err(e));
    }
    Ok(update.existed)
}
