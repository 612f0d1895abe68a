//! Companion note creation on disk.

use exhl::files::notes::{self, DirectoryStore, NoteStore};
use exhl::{Config, Extractor};

use super::helpers::{fixture, Vault};

fn linked_bundle(text: &str) -> exhl::ResultBundle {
    let mut config = Config::default();
    config.output.links = true;
    Extractor::from_config(&config).extract(text)
}

#[test]
fn explode_fixture_into_directory() {
    let vault = Vault::new();
    let store = DirectoryStore::new(vault.path().join("quotes"));

    let report = notes::explode(&linked_bundle(&fixture("walden.md")), "Walden", &store).unwrap();
    assert_eq!(
        report.created,
        vec!["deliberately.md", "Our life is frittered away by detail..md"]
    );
    assert_eq!(
        vault.read("quotes/deliberately.md"),
        "## Source\n> deliberately[^1]\n\n[^1]: [[Walden]]\n"
    );
}

#[test]
fn second_run_skips_everything() {
    let vault = Vault::new();
    let store = DirectoryStore::new(vault.path());
    let bundle = linked_bundle("==one== ==two==");

    notes::explode(&bundle, "Source", &store).unwrap();
    let again = notes::explode(&bundle, "Source", &store).unwrap();
    assert!(again.created.is_empty());
    assert_eq!(again.skipped, vec!["one.md", "two.md"]);
}

#[test]
fn highlights_without_link_ids_are_ignored() {
    let vault = Vault::new();
    let store = DirectoryStore::new(vault.path());
    let bundle = Extractor::from_config(&Config::default()).extract("==plain==");

    let report = notes::explode(&bundle, "Source", &store).unwrap();
    assert!(report.created.is_empty());
    assert!(!store.exists("plain.md"));
}

#[test]
fn index_note_links_back_to_source() {
    let vault = Vault::new();
    let store = DirectoryStore::new(vault.path());
    assert!(notes::write_index("- [[one]]\n\n", "Source", &store).unwrap());
    assert_eq!(
        vault.read("Highlights for Source.md"),
        "- [[one]]\n\n## Source\n- [[Source]]\n"
    );
}
