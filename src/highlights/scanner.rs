//! Runs the combined grammar over a document.

use regex::Captures;
use tracing::trace;

use super::pattern::{Alternative, Branch, PatternSet};

/// One hit of the grammar, tagged with the alternative that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch<'a> {
    pub branch: Branch,
    /// The entire matched span, delimiters included
    pub full: &'a str,
    /// The resolved capture: the highlight content before cleanup
    pub content: &'a str,
    /// Byte offset of `full` in the document
    pub start: usize,
    pub end: usize,
}

/// Collect every match in document order.
///
/// Matches never overlap and an empty match always moves the search forward,
/// both guaranteed by [`regex::Regex::captures_iter`]. A match that yields no
/// usable capture (every group empty or equal to the whole match) is dropped.
pub fn scan<'a>(patterns: &PatternSet, document: &'a str) -> Vec<RawMatch<'a>> {
    let Some(regex) = patterns.regex() else {
        return Vec::new();
    };

    regex
        .captures_iter(document)
        .filter_map(|caps| resolve(patterns.alternatives(), &caps))
        .collect()
}

/// Find the alternative that participated and pick its content.
///
/// Within that alternative the last non-empty group that differs from the
/// full match wins. For a custom pattern `--(.*?)--` this skips the wrapping
/// group and returns the inner capture.
fn resolve<'a>(alternatives: &[Alternative], caps: &Captures<'a>) -> Option<RawMatch<'a>> {
    let full = caps.get(0)?;

    let alternative = alternatives
        .iter()
        .find(|alt| alt.groups.clone().any(|i| caps.get(i).is_some()))?;

    let content = alternative
        .groups
        .clone()
        .rev()
        .filter_map(|i| caps.get(i))
        .map(|m| m.as_str())
        .find(|text| !text.is_empty() && *text != full.as_str());

    match content {
        Some(content) => Some(RawMatch {
            branch: alternative.branch,
            full: full.as_str(),
            content,
            start: full.start(),
            end: full.end(),
        }),
        None => {
            trace!(branch = %alternative.branch, span = full.as_str(), "match without content");
            None
        }
    }
}
