//! Highlight extraction pipeline.
//!
//! A note goes through four stages:
//!
//! - [`PatternSet`] - combines the enabled highlight syntaxes into one grammar
//! - [`scan`] - finds every match and the branch that produced it
//! - [`Normalizer`] - trims, capitalizes and derives link ids
//! - [`ContextResolver`] - looks up the enclosing lines (contextual mode)
//!
//! [`Extractor`] wires them together and [`render`] turns the result into a
//! markdown list.
//!
//! # Example
//!
//! ```ignore
//! use exhl::config::HighlightsConfig;
//! use exhl::highlights::{ExtractOptions, Extractor};
//!
//! let extractor = Extractor::new(&HighlightsConfig::default(), ExtractOptions::default());
//! let bundle = extractor.extract("Some ==important== text");
//! assert_eq!(bundle.texts(), vec!["important"]);
//! ```

mod context;
mod normalize;
mod pattern;
mod render;
mod scanner;
mod types;

pub use context::{ContextResolver, Document};
pub use normalize::{capitalize_first, Normalized, Normalizer};
pub use pattern::{Branch, PatternSet, RejectedPattern};
pub use render::{render, RenderOptions, Rendered, NOTE_TITLE_PLACEHOLDER};
pub use scanner::{scan, RawMatch};
pub use types::{ExtractOptions, Highlight, OutputMode, ResultBundle};

use std::collections::HashSet;

use tracing::debug;

use crate::config::{Config, DedupKey, HighlightsConfig};

/// Runs the whole pipeline for one set of settings.
///
/// Rejected custom patterns are logged and left out of the grammar. An
/// `Extractor` can be reused for any number of notes.
#[derive(Debug, Clone)]
pub struct Extractor {
    patterns: PatternSet,
    normalizer: Normalizer,
    mode: OutputMode,
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(settings: &HighlightsConfig, options: ExtractOptions) -> Self {
        Self {
            patterns: PatternSet::build(settings),
            normalizer: Normalizer {
                flatten: options.flatten,
                auto_capitalize: settings.auto_capitalize,
                link_ids: options.link_ids,
            },
            mode: OutputMode::from_settings(settings),
            options,
        }
    }

    /// Extractor for the settings in a loaded config file.
    ///
    /// Link ids are derived when links are rendered; multi-line highlights are
    /// flattened whenever links or footnotes are on.
    pub fn from_config(config: &Config) -> Self {
        let options = ExtractOptions {
            dedup_key: config.extraction.dedup_key,
            context_search: config.extraction.context_search,
            link_ids: config.output.links,
            flatten: config.output.links || config.output.footnotes,
        };
        Self::new(&config.highlights, options)
    }

    /// Override the output mode chosen by the settings.
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Extract highlights from one note.
    pub fn extract(&self, text: &str) -> ResultBundle {
        let document = Document::new(text);
        let matches = scan(&self.patterns, document.text());
        debug!(count = matches.len(), mode = ?self.mode, "scanned note");

        let mut resolver = match self.mode {
            OutputMode::ContextualQuotes => {
                Some(ContextResolver::new(&document, self.options.context_search))
            }
            OutputMode::RawHighlights => None,
        };
        let mut seen: HashSet<String> = HashSet::new();
        let mut highlights = Vec::with_capacity(matches.len());

        for raw in matches {
            let normalized = self.normalizer.normalize(raw.content);

            let context = match resolver.as_mut() {
                Some(resolver) => resolver.resolve(raw.content).map(str::to_string),
                None => {
                    let key = match self.options.dedup_key {
                        DedupKey::Raw => raw.content.to_string(),
                        DedupKey::Normalized => normalized.text.clone(),
                    };
                    if !seen.insert(key) {
                        continue;
                    }
                    None
                }
            };

            highlights.push(Highlight {
                text: normalized.text,
                raw: raw.content.to_string(),
                branch: raw.branch,
                link_id: normalized.link_id,
                context,
            });
        }

        ResultBundle {
            mode: self.mode,
            highlights,
            contexts: resolver.map(ContextResolver::finish).unwrap_or_default(),
            rendered_markdown: None,
        }
    }
}
