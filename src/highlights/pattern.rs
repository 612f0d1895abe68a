//! Builds the combined highlight grammar.
//!
//! Every enabled feature contributes one alternative to a single regular
//! expression. The builder remembers which capture groups belong to which
//! alternative so the scanner can report the branch that fired instead of
//! guessing from group positions.

use std::fmt;
use std::ops::Range;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::HighlightsConfig;

/// `==text==`, may span lines.
const DOUBLE_EQUALS: &str = r"==((?s:.*?))==";

/// `<mark ...>text</mark>` as written by the Highlightr plugin.
const MARK_TAG: &str = r"<mark[^>]*?>((?s:.*?))</mark>";

/// `**text**`
const BOLD: &str = r"\*\*((?s:.*?))\*\*";

/// The feature an alternative of the grammar comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    DoubleEquals,
    Mark,
    /// Index into the configured custom pattern list
    Custom(usize),
    Bold,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::DoubleEquals => write!(f, "double-equals"),
            Branch::Mark => write!(f, "mark"),
            Branch::Custom(index) => write!(f, "custom #{}", index + 1),
            Branch::Bold => write!(f, "bold"),
        }
    }
}

/// A custom pattern that was left out of the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPattern {
    pub index: usize,
    pub pattern: String,
    pub reason: String,
}

/// One alternative of the combined grammar and its capture groups.
#[derive(Debug, Clone)]
pub(crate) struct Alternative {
    pub(crate) branch: Branch,
    /// Capture group indices owned by this alternative in the combined regex
    pub(crate) groups: Range<usize>,
}

/// The compiled grammar plus the branch layout of its capture groups.
#[derive(Debug, Clone)]
pub struct PatternSet {
    regex: Option<Regex>,
    alternatives: Vec<Alternative>,
    rejected: Vec<RejectedPattern>,
}

impl PatternSet {
    /// Assemble the grammar for the given settings.
    ///
    /// Alternatives are ordered: double-equals, mark (if enabled), each custom
    /// pattern in declaration order, bold (if enabled). A custom pattern that
    /// does not compile on its own, once wrapped, or next to the other
    /// alternatives is skipped and reported through [`PatternSet::rejected`].
    pub fn build(settings: &HighlightsConfig) -> Self {
        let mut builder = Builder::default();

        builder.push(Branch::DoubleEquals, DOUBLE_EQUALS.to_string());
        if settings.use_highlightr {
            builder.push(Branch::Mark, MARK_TAG.to_string());
        }
        for (index, raw) in settings.custom_highlight_patterns.iter().enumerate() {
            if raw.is_empty() {
                continue;
            }
            if let Err(e) = Regex::new(raw) {
                builder.reject(index, raw, e.to_string());
                continue;
            }
            let wrapped = format!("({})", raw);
            if let Err(reason) = builder.try_push(Branch::Custom(index), wrapped) {
                builder.reject(index, raw, reason);
            }
        }
        if settings.use_bold_for_highlights {
            builder.push(Branch::Bold, BOLD.to_string());
        }

        builder.finish()
    }

    /// The combined regular expression, if any alternative compiled.
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    /// Branches in grammar order.
    pub fn branches(&self) -> impl Iterator<Item = Branch> + '_ {
        self.alternatives.iter().map(|a| a.branch)
    }

    /// Custom patterns that were left out.
    pub fn rejected(&self) -> &[RejectedPattern] {
        &self.rejected
    }

    pub(crate) fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }
}

#[derive(Default)]
struct Builder {
    sources: Vec<String>,
    alternatives: Vec<Alternative>,
    regex: Option<Regex>,
    next_group: usize,
    rejected: Vec<RejectedPattern>,
}

impl Builder {
    /// Add a built-in alternative. Built-ins are constants, so a failure here
    /// only leaves that feature out.
    fn push(&mut self, branch: Branch, source: String) {
        if let Err(reason) = self.try_push(branch, source) {
            warn!(%branch, %reason, "built-in highlight pattern failed to compile");
        }
    }

    /// Compile the grammar with `source` appended; keep it only if that works.
    fn try_push(&mut self, branch: Branch, source: String) -> Result<(), String> {
        let standalone = Regex::new(&source).map_err(|e| e.to_string())?;
        let group_count = standalone.captures_len() - 1;

        let mut joined = self.sources.clone();
        joined.push(source);
        let combined = Regex::new(&joined.join("|")).map_err(|e| e.to_string())?;

        let start = self.next_group.max(1);
        self.alternatives.push(Alternative {
            branch,
            groups: start..start + group_count,
        });
        self.next_group = start + group_count;
        self.sources = joined;
        self.regex = Some(combined);
        Ok(())
    }

    fn reject(&mut self, index: usize, pattern: &str, reason: String) {
        warn!(pattern, %reason, "Invalid regular expression, skipping custom highlight pattern");
        self.rejected.push(RejectedPattern {
            index,
            pattern: pattern.to_string(),
            reason,
        });
    }

    fn finish(self) -> PatternSet {
        if let Some(regex) = &self.regex {
            debug!(grammar = regex.as_str(), "highlight grammar assembled");
        }
        PatternSet {
            regex: self.regex,
            alternatives: self.alternatives,
            rejected: self.rejected,
        }
    }
}
