// Rust guideline compliant 2026-02-06

//! Edge-list file loader.
//!
//! Reads the flat text format describing labeled transitions, one per line:
//!
//! ```text
//! <source> <destination> <label1> [<label2>]
//! # comment lines and blank lines are ignored
//! ```

use crate::{EdgeRecord, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads all edge records from the given file, in file order.
///
/// Parsing policy, per line after trimming:
/// - blank lines and lines starting with `#` are skipped;
/// - lines with four or more whitespace-separated tokens yield a record
///   from the first four tokens (the rest are ignored);
/// - lines with exactly three tokens yield a record with an empty `label2`;
/// - lines with fewer than three tokens are silently dropped.
///
/// Duplicate (source, destination) pairs are all returned; collapsing them
/// is the graph builder's concern.
///
/// # Arguments
///
/// * `path` - Path to the edge-list file
///
/// # Returns
///
/// All parsed records, first-to-last.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read.
pub fn read_edges(path: &Path) -> Result<Vec<EdgeRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(record) = parse_line(&line) {
            records.push(record);
        }
    }

    Ok(records)
}

/// Parses a single input line into an edge record.
///
/// # Arguments
///
/// * `line` - The raw input line
///
/// # Returns
///
/// Some(record) for a valid edge line, None for blank, comment, or
/// short (<3 token) lines.
pub fn parse_line(line: &str) -> Option<EdgeRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.len() {
        0..=2 => None,
        3 => Some(EdgeRecord::new(tokens[0], tokens[1], tokens[2], "")),
        _ => Some(EdgeRecord::new(tokens[0], tokens[1], tokens[2], tokens[3])),
    }
}
