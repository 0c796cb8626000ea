// Rust guideline compliant 2026-02-06

//! Unit tests for the edge-list loader.
//!
//! These tests validate the line parsing policy: token counts, comment and
//! blank-line handling, file ordering, and missing-file errors.

use fsmviz_core::{loader, read_edges, EdgeRecord, Error};
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to write an edge-list file into a temp directory.
fn write_edges_file(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("edges.txt");
    std::fs::write(&path, content).expect("Failed to write edges file");
    path
}

#[test]
fn test_record_count_matches_valid_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_edges_file(
        &temp_dir,
        "A B x 1\n\
         # a comment\n\
         \n\
         B C y 2\n\
         lonely\n\
         D E z\n",
    );

    let records = read_edges(&path).unwrap();
    assert_eq!(
        records.len(),
        3,
        "Only lines with >= 3 tokens should produce records"
    );
}

#[test]
fn test_two_token_line_produces_no_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_edges_file(&temp_dir, "A B\n");

    let records = read_edges(&path).unwrap();
    assert!(records.is_empty(), "A 2-token line must be silently dropped");
}

#[test]
fn test_three_token_line_has_empty_fourth_field() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_edges_file(&temp_dir, "A B x\n");

    let records = read_edges(&path).unwrap();
    assert_eq!(records, vec![EdgeRecord::new("A", "B", "x", "")]);
    assert_eq!(records[0].combined_label(), "x/");
}

#[test]
fn test_extra_tokens_beyond_four_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_edges_file(&temp_dir, "A B x 1 extra tokens here\n");

    let records = read_edges(&path).unwrap();
    assert_eq!(records, vec![EdgeRecord::new("A", "B", "x", "1")]);
}

#[test]
fn test_comment_and_blank_lines_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_edges_file(&temp_dir, "# header\n\n   \n  # indented comment\nA B x 1\n");

    let records = read_edges(&path).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_records_preserve_file_order_including_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_edges_file(&temp_dir, "A B x 1\nB C y 2\nA B z\n");

    let records = read_edges(&path).unwrap();
    assert_eq!(
        records,
        vec![
            EdgeRecord::new("A", "B", "x", "1"),
            EdgeRecord::new("B", "C", "y", "2"),
            EdgeRecord::new("A", "B", "z", ""),
        ],
        "Duplicate pairs must all appear at the loader level; overwriting is the graph's job"
    );
}

#[test]
fn test_tabs_and_multiple_spaces_split_tokens() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_edges_file(&temp_dir, "A\tB   x\t\t1\n");

    let records = read_edges(&path).unwrap();
    assert_eq!(records, vec![EdgeRecord::new("A", "B", "x", "1")]);
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.txt");

    let result = read_edges(&path);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_parse_line_trims_surrounding_whitespace() {
    let record = loader::parse_line("   A B x 1   ").unwrap();
    assert_eq!(record, EdgeRecord::new("A", "B", "x", "1"));
}

#[test]
fn test_parse_line_rejects_comment_and_blank() {
    assert!(loader::parse_line("").is_none());
    assert!(loader::parse_line("   ").is_none());
    assert!(loader::parse_line("# A B x 1").is_none());
}
