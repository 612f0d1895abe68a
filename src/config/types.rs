//! Configuration type definitions and defaults

use serde::{Deserialize, Deserializer, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub highlights: HighlightsConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub explode: ExplodeConfig,
}

/// Which spans count as highlights, and how they are cleaned up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightsConfig {
    /// Include classic markdown bold (`**text**`) spans
    #[serde(default)]
    pub use_bold_for_highlights: bool,
    /// Include Highlightr plugin spans (`<mark class="hltr-...">text</mark>`)
    #[serde(default = "default_use_highlightr")]
    pub use_highlightr: bool,
    /// Extra regular expressions, one per entry
    #[serde(default, deserialize_with = "deserialize_patterns")]
    pub custom_highlight_patterns: Vec<String>,
    /// Uppercase the first letter of each highlight
    #[serde(default)]
    pub auto_capitalize: bool,
    /// Quote the full line around a highlight instead of the highlight itself
    #[serde(default)]
    pub create_contextual_quotes: bool,
}

pub fn default_use_highlightr() -> bool {
    true
}

impl Default for HighlightsConfig {
    fn default() -> Self {
        Self {
            use_bold_for_highlights: false,
            use_highlightr: default_use_highlightr(),
            custom_highlight_patterns: Vec::new(),
            auto_capitalize: false,
            create_contextual_quotes: false,
        }
    }
}

/// Custom patterns are accepted either as a list or as one string with an
/// expression per line.
#[derive(Deserialize)]
#[serde(untagged)]
enum PatternList {
    Lines(String),
    List(Vec<String>),
}

fn deserialize_patterns<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match PatternList::deserialize(deserializer)? {
        PatternList::Lines(text) => text.split('\n').map(str::to_string).collect(),
        PatternList::List(list) => list,
    })
}

/// Which key collapses duplicate highlights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupKey {
    /// The captured text as it appears in the note
    #[default]
    Raw,
    /// The text after cleanup and capitalization
    Normalized,
}

/// How a highlight is looked up in the note's lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextSearch {
    /// The highlight text is used as a regular expression
    #[default]
    Pattern,
    /// The highlight text is searched as-is
    Literal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub dedup_key: DedupKey,
    #[serde(default)]
    pub context_search: ContextSearch,
}

/// Rendering and destination configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Frontmatter property that receives the rendered list
    #[serde(default = "default_property")]
    pub property: String,
    /// Heading template; `$NOTE_TITLE` is replaced with the note title
    #[serde(default)]
    pub headline: String,
    /// Render highlights as `[[links]]`
    #[serde(default)]
    pub links: bool,
    /// Append `[^n]` footnote markers pointing back to the note
    #[serde(default)]
    pub footnotes: bool,
}

pub fn default_property() -> String {
    "highlights".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            property: default_property(),
            headline: String::new(),
            links: false,
            footnotes: false,
        }
    }
}

impl OutputConfig {
    /// The headline template, or `None` when unset.
    pub fn headline_template(&self) -> Option<&str> {
        let trimmed = self.headline.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Companion note configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplodeConfig {
    /// Directory companion notes are written to
    #[serde(default = "default_explode_directory")]
    pub directory: String,
}

pub fn default_explode_directory() -> String {
    ".".to_string()
}

impl Default for ExplodeConfig {
    fn default() -> Self {
        Self {
            directory: default_explode_directory(),
        }
    }
}
