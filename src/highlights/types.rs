//! Values produced by the highlight pipeline.

use serde::{Serialize, Serializer};

use super::pattern::Branch;
use crate::config::{ContextSearch, DedupKey, HighlightsConfig};

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Which list an extraction deduplicates and fills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Highlights are deduplicated; no context lines are collected
    #[default]
    RawHighlights,
    /// Every highlight is kept; the enclosing lines are collected and deduplicated
    ContextualQuotes,
}

impl OutputMode {
    pub fn from_settings(settings: &HighlightsConfig) -> Self {
        if settings.create_contextual_quotes {
            OutputMode::ContextualQuotes
        } else {
            OutputMode::RawHighlights
        }
    }
}

/// Knobs that are not part of the highlight settings themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub dedup_key: DedupKey,
    pub context_search: ContextSearch,
    /// Derive a link id for each highlight
    pub link_ids: bool,
    /// Join multi-line highlights and strip leftover markup
    pub flatten: bool,
}

/// One extracted highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Cleaned text
    pub text: String,
    /// The capture as it appears in the note
    pub raw: String,
    /// Feature that produced the highlight
    pub branch: Branch,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_id: Option<String>,
    /// First line containing the highlight (contextual mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Everything one extraction produces.
///
/// `contexts` is not index-aligned with `highlights`: context lines are
/// deduplicated and a highlight may have none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultBundle {
    pub mode: OutputMode,
    pub highlights: Vec<Highlight>,
    pub contexts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_markdown: Option<String>,
}

impl ResultBundle {
    /// Highlight texts in scan order.
    pub fn texts(&self) -> Vec<&str> {
        self.highlights.iter().map(|h| h.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }
}
