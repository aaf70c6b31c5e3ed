//! Input limit tests
//!
//! Verifies that oversized datasets are rejected at load time instead of
//! being held in memory, and that the limits sit exactly where documented.

use std::fmt::Write;

use taytay::catalog::store::{CatalogError, SongCatalog};
use taytay::parsing::dataset::{parse_dataset_text, DatasetError, MAX_RECORDS};

/// Header plus `rows` data rows, comma-delimited
fn dataset_with_rows(rows: usize) -> String {
    let mut text = String::with_capacity(rows * 16);
    text.push_str("name,id\n");
    for i in 0..rows {
        writeln!(text, "Song {i},t{i}").unwrap();
    }
    text
}

/// Test that a dataset exactly at the record limit still parses
#[test]
fn test_record_limit_boundary_accepted() {
    let rows = parse_dataset_text(&dataset_with_rows(MAX_RECORDS), b',').unwrap();
    assert_eq!(rows.len(), MAX_RECORDS);
    assert_eq!(rows[MAX_RECORDS - 1].identifier.as_deref(), Some("t99999"));
}

/// Test that one record over the limit is rejected
#[test]
fn test_record_limit_exceeded_rejected() {
    let result = parse_dataset_text(&dataset_with_rows(MAX_RECORDS + 1), b',');
    assert!(
        matches!(result, Err(DatasetError::TooManyRecords(limit)) if limit == MAX_RECORDS),
        "expected TooManyRecords, got {result:?}"
    );
}

/// Test that the limit surfaces through catalog loading with a readable error
#[test]
fn test_record_limit_through_catalog_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.csv");
    std::fs::write(&path, dataset_with_rows(MAX_RECORDS + 1)).unwrap();

    let err = SongCatalog::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Dataset(DatasetError::TooManyRecords(_))
    ));
    assert!(err.to_string().contains("Too many records"));
}
