//! Finds the lines of a note that surround a highlight.

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::config::ContextSearch;

/// A note split into lines, with empty lines dropped.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    text: &'a str,
    non_empty_lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        let non_empty_lines = text.lines().filter(|line| !line.is_empty()).collect();
        Self {
            text,
            non_empty_lines,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn non_empty_lines(&self) -> &[&'a str] {
        &self.non_empty_lines
    }
}

/// Collects context lines for a sequence of highlights.
///
/// Each distinct line is kept once. [`ContextResolver::finish`] returns them
/// ordered by where they appear in the note, not by which highlight found
/// them first.
pub struct ContextResolver<'d, 'a> {
    document: &'d Document<'a>,
    search: ContextSearch,
    /// Line text to the index of its first occurrence
    seen: HashMap<&'a str, usize>,
}

impl<'d, 'a> ContextResolver<'d, 'a> {
    pub fn new(document: &'d Document<'a>, search: ContextSearch) -> Self {
        Self {
            document,
            search,
            seen: HashMap::new(),
        }
    }

    /// Record every line matching `needle` and return the first one.
    ///
    /// Returns `None` when no line matches, which happens when the highlight
    /// spans several lines.
    pub fn resolve(&mut self, needle: &str) -> Option<&'a str> {
        let matcher = LineMatcher::new(needle, self.search);
        let document = self.document;
        let mut first = None;

        for (index, &line) in document.non_empty_lines().iter().enumerate() {
            if matcher.is_match(line) {
                self.seen.entry(line).or_insert(index);
                first.get_or_insert(line);
            }
        }

        if first.is_none() {
            debug!(needle, "no context line found for highlight");
        }
        first
    }

    /// Context lines in document order.
    pub fn finish(self) -> Vec<String> {
        let mut lines: Vec<(usize, &str)> = self
            .seen
            .into_iter()
            .map(|(line, index)| (index, line))
            .collect();
        lines.sort_unstable_by_key(|(index, _)| *index);
        lines.into_iter().map(|(_, line)| line.to_string()).collect()
    }
}

enum LineMatcher<'n> {
    Pattern(Regex),
    Literal(&'n str),
}

impl<'n> LineMatcher<'n> {
    /// In pattern mode the highlight is compiled as a regular expression, so
    /// `a.c` also matches `abc`. Text that is not a valid expression is
    /// searched literally.
    fn new(needle: &'n str, search: ContextSearch) -> Self {
        match search {
            ContextSearch::Literal => LineMatcher::Literal(needle),
            ContextSearch::Pattern => match Regex::new(needle) {
                Ok(regex) => LineMatcher::Pattern(regex),
                Err(e) => {
                    debug!(needle, error = %e, "highlight is not a valid pattern, searching literally");
                    LineMatcher::Literal(needle)
                }
            },
        }
    }

    fn is_match(&self, line: &str) -> bool {
        match self {
            LineMatcher::Pattern(regex) => regex.is_match(line),
            LineMatcher::Literal(needle) => line.contains(needle),
        }
    }
}
