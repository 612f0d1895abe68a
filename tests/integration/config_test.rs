//! Settings file parsing.

use exhl::config::{ContextSearch, DedupKey};
use exhl::{Config, State};

use super::helpers::Vault;

#[test]
fn missing_file_yields_defaults() {
    let vault = Vault::new();
    assert_eq!(Config::load_from(&vault.config_path()).unwrap(), Config::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let vault = Vault::new();
    let path = vault.write_config(
        r#"
[highlights]
use_bold_for_highlights = true

[extraction]
dedup_key = "normalized"
context_search = "literal"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert!(config.highlights.use_bold_for_highlights);
    assert!(config.highlights.use_highlightr);
    assert_eq!(config.extraction.dedup_key, DedupKey::Normalized);
    assert_eq!(config.extraction.context_search, ContextSearch::Literal);
    assert_eq!(config.output.property, "highlights");
}

#[test]
fn custom_patterns_accept_newline_separated_string() {
    let vault = Vault::new();
    let path = vault.write_config(
        "[highlights]\ncustom_highlight_patterns = \"\\\\+\\\\+(.*?)\\\\+\\\\+\\n%%(.*?)%%\"\n",
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.highlights.custom_highlight_patterns,
        vec![r"\+\+(.*?)\+\+", "%%(.*?)%%"]
    );
}

#[test]
fn invalid_toml_names_the_file() {
    let vault = Vault::new();
    let path = vault.write_config("[highlights\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn state_lives_next_to_config() {
    let vault = Vault::new();
    let state_path = State::path_for(&vault.config_path());
    assert_eq!(state_path, vault.path().join("exhl").join("state.toml"));

    State { next_footnote: 12 }.save(&state_path).unwrap();
    assert_eq!(State::load(&state_path).unwrap().next_footnote, 12);
}
