//! End-to-end tests for the lemmata binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_dictionary(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("dictionary.json");
    fs::write(
        &path,
        r#"[
            {"term": "radix tree", "definition": "a compressed trie", "aliases": ["patricia trie"]},
            {"term": "lemma", "definition": "a canonical word form"}
        ]"#,
    )
    .expect("write dictionary");
    path
}

#[test]
fn scan_reports_phrases_with_positions() {
    let dir = tempfile::tempdir().expect("temp dir");
    let dictionary = write_dictionary(&dir);
    let input = dir.path().join("notes.txt");
    fs::write(&input, "Every Radix Tree stores one lemma per node.\n").expect("write input");

    Command::cargo_bin("lemmata")
        .expect("binary builds")
        .args(["scan", "--quiet", "--dictionary"])
        .arg(&dictionary)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Radix Tree"))
        .stdout(predicate::str::contains("(lemma)"))
        .stdout(predicate::str::contains(":6-16"));
}

#[test]
fn scan_resolves_aliases_to_the_canonical_term() {
    let dir = tempfile::tempdir().expect("temp dir");
    let dictionary = write_dictionary(&dir);
    let input = dir.path().join("notes.txt");
    fs::write(&input, "also called a patricia trie.\n").expect("write input");

    Command::cargo_bin("lemmata")
        .expect("binary builds")
        .args(["scan", "--quiet", "--format", "json", "--dictionary"])
        .arg(&dictionary)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"patricia trie\""))
        .stdout(predicate::str::contains("\"term\": \"radix tree\""));
}

#[test]
fn lookup_prints_the_definition() {
    let dir = tempfile::tempdir().expect("temp dir");
    let dictionary = write_dictionary(&dir);

    Command::cargo_bin("lemmata")
        .expect("binary builds")
        .args(["lookup", "--quiet", "--dictionary"])
        .arg(&dictionary)
        .arg("Lemma")
        .assert()
        .success()
        .stdout(predicate::str::contains("a canonical word form"));
}

#[test]
fn lookup_of_an_unknown_term_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let dictionary = write_dictionary(&dir);

    Command::cargo_bin("lemmata")
        .expect("binary builds")
        .args(["lookup", "--quiet", "--dictionary"])
        .arg(&dictionary)
        .arg("missing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no definition found"));
}

#[test]
fn scan_with_an_unreadable_dictionary_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("notes.txt");
    fs::write(&input, "text\n").expect("write input");

    Command::cargo_bin("lemmata")
        .expect("binary builds")
        .args(["scan", "--quiet", "--dictionary"])
        .arg(dir.path().join("absent.json"))
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
