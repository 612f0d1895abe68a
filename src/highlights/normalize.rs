//! Cleanup applied to each captured highlight.

use std::sync::OnceLock;

use regex::Regex;

use crate::files::filename;

/// Opening Highlightr tags, with or without attributes.
fn mark_open() -> &'static Regex {
    static MARK_OPEN: OnceLock<Regex> = OnceLock::new();
    MARK_OPEN.get_or_init(|| Regex::new(r"<mark[^>]*>").expect("valid mark tag pattern"))
}

/// Delimiters that can survive inside a capture, e.g. nested markup.
const LEFTOVER_DELIMITERS: &[&str] = &["==", "</mark>", "**"];

/// Cleanup steps, always applied in this order:
///
/// 1. `flatten` only: line breaks become spaces, leftover delimiters are removed
/// 2. trim
/// 3. double spaces become single spaces, in one pass
/// 4. `auto_capitalize` only: first character uppercased
/// 5. `link_ids` only: a link id is derived from the result
///
/// Step 3 replaces each non-overlapping pair of spaces once, so three spaces
/// become two. This matches the behaviour notes were written against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    pub flatten: bool,
    pub auto_capitalize: bool,
    pub link_ids: bool,
}

/// Normalized text and, when requested, its link id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub link_id: Option<String>,
}

impl Normalizer {
    pub fn normalize(&self, raw: &str) -> Normalized {
        let mut text = if self.flatten {
            strip_delimiters(&flatten_lines(raw))
        } else {
            raw.to_string()
        };

        text = text.trim().replace("  ", " ");

        if self.auto_capitalize {
            text = capitalize_first(&text);
        }

        let link_id = self.link_ids.then(|| filename::link_id(&text));

        Normalized { text, link_id }
    }
}

fn flatten_lines(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ")
}

fn strip_delimiters(text: &str) -> String {
    let without_tags = mark_open().replace_all(text, "");
    LEFTOVER_DELIMITERS
        .iter()
        .fold(without_tags.into_owned(), |acc, delimiter| acc.replace(delimiter, ""))
}

/// Uppercase the first character; everything else is left alone.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
