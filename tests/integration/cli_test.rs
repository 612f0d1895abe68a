//! Tests of the exhl binary.
//!
//! Every run points `--config` into a scratch directory so the user's own
//! settings and footnote counter are never touched.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{fixture, Vault};

fn exhl(vault: &Vault) -> Command {
    let mut cmd = Command::cargo_bin("exhl").unwrap();
    cmd.arg("--config")
        .arg(vault.config_path())
        .env("NO_COLOR", "1")
        .env_remove("EXHL_LOG");
    cmd
}

// ============================================================================
// extract
// ============================================================================

#[test]
fn extract_prints_markdown_list() {
    let vault = Vault::new();
    let note = vault.write_note("Walden.md", &fixture("walden.md"));

    exhl(&vault)
        .arg("extract")
        .arg(&note)
        .assert()
        .success()
        .stdout("- deliberately\n- Our life is frittered away by detail.\n\n");
}

#[test]
fn extract_without_highlights_reports_nothing_found() {
    let vault = Vault::new();
    let note = vault.write_note("empty.md", "nothing here\n");

    exhl(&vault)
        .arg("extract")
        .arg(&note)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No highlights found"));
}

#[test]
fn extract_footnotes_continue_across_runs() {
    let vault = Vault::new();
    let first = vault.write_note("First.md", "==a== ==b==\n");
    let second = vault.write_note("Second.md", "==c==\n");

    exhl(&vault)
        .args(["extract", "--footnotes"])
        .arg(&first)
        .assert()
        .success()
        .stdout(predicate::str::contains("[^2]: [[First]]"));

    exhl(&vault)
        .args(["extract", "--footnotes"])
        .arg(&second)
        .assert()
        .success()
        .stdout("- c[^3]\n\n[^3]: [[Second]]\n");
}

#[test]
fn extract_footnote_start_and_title_flags() {
    let vault = Vault::new();
    let note = vault.write_note("x.md", "==a==\n");

    exhl(&vault)
        .args(["extract", "--footnotes", "--footnote-start", "40", "--title", "Book"])
        .arg(&note)
        .assert()
        .success()
        .stdout("- a[^40]\n\n[^40]: [[Book]]\n");
}

#[test]
fn extract_uses_settings_file() {
    let vault = Vault::new();
    vault.write_config(
        r#"
[highlights]
use_bold_for_highlights = true
auto_capitalize = true

[output]
headline = "Highlights for $NOTE_TITLE"
links = true
"#,
    );
    let note = vault.write_note("Walden.md", &fixture("walden.md"));

    exhl(&vault)
        .arg("extract")
        .arg(&note)
        .assert()
        .success()
        .stdout(
            "## Highlights for Walden\n\
             - [[Deliberately]]\n\
             - [[Our life is frittered away by detail.]]\n\
             - [[Simplify]]\n\n",
        );
}

#[test]
fn extract_json_contains_branches() {
    let vault = Vault::new();
    let note = vault.write_note("n.md", "==a== <mark>b</mark>\n");

    let output = exhl(&vault)
        .args(["extract", "--json"])
        .arg(&note)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["highlights"][1]["branch"], "mark");
    assert_eq!(json["rendered_markdown"], "- a\n- b\n\n");
}

#[test]
fn extract_missing_file_fails() {
    let vault = Vault::new();
    exhl(&vault)
        .args(["extract", "does-not-exist.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read note"));
}

#[test]
fn broken_custom_pattern_is_logged_and_skipped() {
    let vault = Vault::new();
    vault.write_config("[highlights]\ncustom_highlight_patterns = [\"(\"]\n");
    let note = vault.write_note("n.md", "==ok==\n");

    exhl(&vault)
        .arg("extract")
        .arg(&note)
        .assert()
        .success()
        .stdout("- ok\n\n")
        .stderr(predicate::str::contains("skipping custom highlight pattern"));
}

// ============================================================================
// property
// ============================================================================

#[test]
fn property_adds_then_updates() {
    let vault = Vault::new();
    let note = vault.write_note("Walden.md", &fixture("walden.md"));

    exhl(&vault)
        .arg("property")
        .arg(&note)
        .assert()
        .success()
        .stdout("Highlights added as property!\n");

    exhl(&vault)
        .arg("property")
        .arg(&note)
        .assert()
        .success()
        .stdout("Highlights property was updated.\n");

    let content = vault.read("Walden.md");
    assert!(content.contains("highlights:"));
    assert!(content.contains("title: Walden"));
}

#[test]
fn property_reports_malformed_frontmatter() {
    let vault = Vault::new();
    let original = "---\ntitle: [broken\n---\n==a==\n";
    let note = vault.write_note("bad.md", original);

    exhl(&vault)
        .arg("property")
        .arg(&note)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed frontmatter"));
    assert_eq!(vault.read("bad.md"), original);
}

// ============================================================================
// explode
// ============================================================================

#[test]
fn explode_creates_notes_and_skips_existing() {
    let vault = Vault::new();
    let note = vault.write_note("Walden.md", "==first== and ==second==\n");
    vault.write_note("second.md", "hand written\n");

    exhl(&vault)
        .arg("explode")
        .arg(&note)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created first.md"))
        .stdout(predicate::str::contains("Skipped 1 existing note(s)"));

    assert_eq!(
        vault.read("first.md"),
        "## Source\n> first[^1]\n\n[^1]: [[Walden]]\n"
    );
    assert_eq!(vault.read("second.md"), "hand written\n");
}

#[test]
fn explode_contextual_quotes_use_the_line() {
    let vault = Vault::new();
    vault.write_config("[highlights]\ncreate_contextual_quotes = true\n");
    let note = vault.write_note("Walden.md", "Live ==deliberately== always.\n");

    exhl(&vault)
        .args(["explode", "--dir", "out"])
        .arg(&note)
        .assert()
        .success();

    assert_eq!(
        vault.read("out/deliberately.md"),
        "## Source\n> Live ==deliberately== always.[^1]\n\n[^1]: [[Walden]]\n"
    );
}

// ============================================================================
// config / completions
// ============================================================================

#[test]
fn config_path_echoes_override() {
    let vault = Vault::new();
    exhl(&vault)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", vault.config_path().display()));
}

#[test]
fn config_show_prints_defaults() {
    let vault = Vault::new();
    exhl(&vault)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[highlights]"))
        .stdout(predicate::str::contains("use_highlightr = true"))
        .stdout(predicate::str::contains("dedup_key = \"raw\""));
}

#[test]
fn completions_for_zsh() {
    let vault = Vault::new();
    exhl(&vault)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef exhl"));
}
