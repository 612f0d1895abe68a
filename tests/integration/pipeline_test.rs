//! End-to-end extraction tests against the library API.

use exhl::config::{ContextSearch, DedupKey, HighlightsConfig};
use exhl::highlights::{Branch, RenderOptions};
use exhl::{Config, ExtractOptions, Extractor, OutputMode};

use super::helpers::fixture;

fn settings() -> HighlightsConfig {
    HighlightsConfig::default()
}

// ============================================================================
// Raw highlights
// ============================================================================

#[test]
fn default_settings_find_equals_and_mark() {
    let bundle = Extractor::new(&settings(), ExtractOptions::default()).extract(&fixture("walden.md"));
    assert_eq!(
        bundle.texts(),
        vec!["deliberately", "Our life is frittered away by detail."]
    );
    assert_eq!(bundle.highlights[0].branch, Branch::DoubleEquals);
    assert_eq!(bundle.highlights[1].branch, Branch::Mark);
}

#[test]
fn bold_is_opt_in() {
    let config = HighlightsConfig {
        use_bold_for_highlights: true,
        ..settings()
    };
    let bundle = Extractor::new(&config, ExtractOptions::default()).extract(&fixture("walden.md"));
    assert_eq!(bundle.texts().len(), 3);
    assert_eq!(bundle.highlights[2].text, "simplify");
    assert_eq!(bundle.highlights[2].branch, Branch::Bold);
}

#[test]
fn highlightr_tags_can_be_disabled() {
    let config = HighlightsConfig {
        use_highlightr: false,
        ..settings()
    };
    let bundle = Extractor::new(&config, ExtractOptions::default()).extract(&fixture("walden.md"));
    assert_eq!(bundle.texts(), vec!["deliberately"]);
}

#[test]
fn custom_pattern_uses_inner_group() {
    let config = HighlightsConfig {
        custom_highlight_patterns: vec![r"\+\+(.*?)\+\+".to_string()],
        ..settings()
    };
    let bundle =
        Extractor::new(&config, ExtractOptions::default()).extract("a ++custom++ and ==equals==");
    assert_eq!(bundle.texts(), vec!["custom", "equals"]);
    assert_eq!(bundle.highlights[0].branch, Branch::Custom(0));
}

#[test]
fn invalid_custom_pattern_does_not_break_the_rest() {
    let config = HighlightsConfig {
        custom_highlight_patterns: vec!["([".to_string(), r"%%(.+?)%%".to_string()],
        ..settings()
    };
    let extractor = Extractor::new(&config, ExtractOptions::default());
    assert_eq!(extractor.patterns().rejected().len(), 1);
    assert_eq!(extractor.patterns().rejected()[0].index, 0);

    let bundle = extractor.extract("%%kept%% ==also==");
    assert_eq!(bundle.texts(), vec!["kept", "also"]);
    assert_eq!(bundle.highlights[0].branch, Branch::Custom(1));
}

#[test]
fn normalized_dedup_collapses_spacing_variants() {
    let options = ExtractOptions {
        dedup_key: DedupKey::Normalized,
        ..ExtractOptions::default()
    };
    let text = "==same== then ==  same  ==";
    let raw = Extractor::new(&settings(), ExtractOptions::default()).extract(text);
    let normalized = Extractor::new(&settings(), options).extract(text);
    assert_eq!(raw.highlights.len(), 2);
    assert_eq!(normalized.highlights.len(), 1);
}

// ============================================================================
// Contextual quotes
// ============================================================================

#[test]
fn contextual_mode_collects_every_matching_line() {
    let config = HighlightsConfig {
        create_contextual_quotes: true,
        ..settings()
    };
    let bundle = Extractor::new(&config, ExtractOptions::default()).extract(&fixture("walden.md"));
    assert_eq!(bundle.mode, OutputMode::ContextualQuotes);
    assert_eq!(bundle.highlights.len(), 3);
    assert_eq!(
        bundle.contexts,
        vec![
            "I went to the woods because I wished to live ==deliberately==, to front only the",
            "<mark style=\"background: #FFB8EBA6;\">Our life is frittered away by detail.</mark>",
            "Again, ==deliberately==.",
        ]
    );
}

#[test]
fn literal_search_treats_metacharacters_as_text() {
    let config = HighlightsConfig {
        create_contextual_quotes: true,
        ..settings()
    };
    let options = ExtractOptions {
        context_search: ContextSearch::Literal,
        ..ExtractOptions::default()
    };
    let bundle = Extractor::new(&config, options).extract("==a.c==\nabc");
    assert_eq!(bundle.contexts, vec!["==a.c=="]);
}

#[test]
fn unparseable_highlight_still_finds_its_line() {
    let config = HighlightsConfig {
        create_contextual_quotes: true,
        ..settings()
    };
    let bundle = Extractor::new(&config, ExtractOptions::default()).extract("see ==f(x==");
    assert_eq!(bundle.contexts, vec!["see ==f(x=="]);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn rendered_fixture_with_links_and_footnotes() {
    let mut config = Config::default();
    config.output.links = true;
    config.output.footnotes = true;
    config.output.headline = "Highlights for $NOTE_TITLE".to_string();
    config.highlights.auto_capitalize = true;

    let mut bundle = Extractor::from_config(&config).extract(&fixture("walden.md"));
    let next = bundle.render(
        &RenderOptions {
            links: true,
            footnotes: true,
            headline: config.output.headline_template(),
            title: Some("Walden"),
        },
        5,
    );

    assert_eq!(next, 7);
    insta::assert_snapshot!(bundle.rendered_markdown.unwrap(), @r"
    ## Highlights for Walden
    - [[Deliberately]][^5]
    - [[Our life is frittered away by detail.]][^6]

    [^5]: [[Walden]]
    [^6]: [[Walden]]
    ");
}

#[test]
fn bundle_serializes_to_json() {
    let bundle = Extractor::new(&settings(), ExtractOptions::default()).extract("==a==");
    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["mode"], "raw_highlights");
    assert_eq!(json["highlights"][0]["text"], "a");
    assert_eq!(json["highlights"][0]["branch"], "double-equals");
    assert!(json["highlights"][0].get("link_id").is_none());
}
