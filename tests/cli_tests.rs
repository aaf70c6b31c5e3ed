//! End-to-end tests for the `taytay` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/songs.csv")
}

fn taytay() -> Command {
    Command::cargo_bin("taytay").expect("binary should build")
}

#[test]
fn test_abbreviate_prints_short_forms() {
    taytay()
        .args([
            "abbreviate",
            "Closure (Taylor's Version)",
            "All Too Well (10 Minute Version) (From The Vault)",
            "I Almost Do",
        ])
        .assert()
        .success()
        .stdout("C(TV)\nATW(1MV)(FTV)\nAD\n");
}

#[test]
fn test_abbreviate_tsv() {
    taytay()
        .args(["--format", "tsv", "abbreviate", "Mine"])
        .assert()
        .success()
        .stdout("title\tshort_form\nMine\tM\n");
}

#[test]
fn test_search_long_to_short() {
    taytay()
        .arg("search")
        .arg("closure")
        .arg("--dataset")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Closure (Taylor's Version)"))
        .stdout(predicate::str::contains("C(TV)"))
        .stdout(predicate::str::contains("[exact]"))
        .stdout(predicate::str::contains(
            "https://open.spotify.com/track/trk-closure",
        ));
}

#[test]
fn test_search_short_to_long_json() {
    let output = taytay()
        .args(["--format", "json", "search", "eg(", "--direction", "short"])
        .arg("--dataset")
        .arg(fixture())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["query"], "eg(");
    assert_eq!(json["choice"], "short");
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["primary"], "EG(ESF)");
    assert_eq!(results[0]["secondary"], "End Game (feat. Ed Sheeran & Future)");
    assert_eq!(results[0]["kind"], "exact");
}

#[test]
fn test_search_fuzzy_fallback() {
    taytay()
        .args(["--format", "tsv", "search", "love stroy"])
        .arg("--dataset")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Love Story\tLS\tfuzzy\t"));
}

#[test]
fn test_search_blank_query_short_circuits() {
    // The dataset is never read for a blank query
    taytay()
        .args(["search", "   ", "--dataset", "/nonexistent/songs.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Query: (empty)"))
        .stdout(predicate::str::contains("No matches found."));
}

#[test]
fn test_search_missing_dataset_fails() {
    taytay()
        .args(["search", "mine", "--dataset", "/nonexistent/songs.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read dataset"));
}

#[test]
fn test_catalog_show() {
    taytay()
        .args(["catalog", "show", "trk-dbm", "--dataset"])
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Short form: DBM"));
}

#[test]
fn test_catalog_list_filter() {
    taytay()
        .args(["--format", "tsv", "catalog", "list", "--filter", "LOVE", "--dataset"])
        .arg(fixture())
        .assert()
        .success()
        .stdout("short_form\ttitle\tid\nLS\tLove Story\ttrk-love-story\nL\tLover\ttrk-lover\n");
}

#[test]
fn test_catalog_export() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("catalog.json");

    taytay()
        .args(["catalog", "export"])
        .arg(&out)
        .arg("--dataset")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 8 songs"));

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(exported["records"].as_array().unwrap().len(), 8);
    assert_eq!(exported["records"][0]["short_form"], "C(TV)");
}
