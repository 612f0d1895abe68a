//! Markdown rendering of an extraction.

use super::types::{OutputMode, ResultBundle};

/// Placeholder replaced with the note title in headline templates.
pub const NOTE_TITLE_PLACEHOLDER: &str = "$NOTE_TITLE";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    /// Render `[[link id]]` instead of the highlight text
    pub links: bool,
    /// Append `[^n]` markers
    pub footnotes: bool,
    /// Heading template, see [`NOTE_TITLE_PLACEHOLDER`]
    pub headline: Option<&'a str>,
    /// Title of the source note
    pub title: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub markdown: String,
    /// Counter value for the next invocation
    pub next_footnote: u32,
}

/// Render a bundle as a markdown list.
///
/// Footnotes are numbered from `first_footnote`; the caller owns the counter
/// and stores [`Rendered::next_footnote`] for the next run. An empty bundle
/// renders to an empty string and leaves the counter unchanged.
pub fn render(bundle: &ResultBundle, options: &RenderOptions<'_>, first_footnote: u32) -> Rendered {
    let items = list_items(bundle, options);
    if items.is_empty() {
        return Rendered {
            markdown: String::new(),
            next_footnote: first_footnote,
        };
    }

    let mut markdown = String::new();
    if let Some(template) = options.headline {
        markdown.push_str(&headline(template, options.title.unwrap_or_default()));
        markdown.push('\n');
    }

    let mut footnote = first_footnote;
    let mut used = Vec::new();
    for item in &items {
        markdown.push_str("- ");
        markdown.push_str(item);
        if options.footnotes {
            markdown.push_str(&format!("[^{}]", footnote));
            used.push(footnote);
            footnote += 1;
        }
        markdown.push('\n');
    }
    markdown.push('\n');

    if let Some(title) = options.title.filter(|_| options.footnotes) {
        for n in used {
            markdown.push_str(&format!("[^{}]: [[{}]]\n", n, title));
        }
    }

    Rendered {
        markdown,
        next_footnote: footnote,
    }
}

impl ResultBundle {
    /// Render into [`ResultBundle::rendered_markdown`], returning the next footnote number.
    pub fn render(&mut self, options: &RenderOptions<'_>, first_footnote: u32) -> u32 {
        let rendered = render(self, options, first_footnote);
        self.rendered_markdown = Some(rendered.markdown);
        rendered.next_footnote
    }
}

fn list_items(bundle: &ResultBundle, options: &RenderOptions<'_>) -> Vec<String> {
    match bundle.mode {
        OutputMode::ContextualQuotes => bundle.contexts.clone(),
        OutputMode::RawHighlights => bundle
            .highlights
            .iter()
            .map(|h| match h.link_id.as_deref() {
                Some(id) if options.links && !id.is_empty() => format!("[[{}]]", id),
                _ => h.text.clone(),
            })
            .collect(),
    }
}

/// Substitute the title and make sure the line is a heading.
fn headline(template: &str, title: &str) -> String {
    let line = template.replace(NOTE_TITLE_PLACEHOLDER, title);
    if line.starts_with('#') {
        line
    } else {
        format!("## {}", line)
    }
}
