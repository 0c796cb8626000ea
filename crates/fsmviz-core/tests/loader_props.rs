// Rust guideline compliant 2026-02-06

//! Property-based tests for the edge-list loader.
//!
//! These tests validate universal properties of the parsing policy across
//! arbitrary generated token lines.

use fsmviz_core::loader::parse_line;
use proptest::prelude::*;

/// Generates a single alphanumeric token (never starts with `#`).
fn arb_token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,8}"
}

/// Generates a line as a list of tokens.
fn arb_token_line() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_token(), 0..7)
}

proptest! {
    /// A line yields a record iff it has at least three tokens.
    #[test]
    fn prop_record_iff_three_or_more_tokens(tokens in arb_token_line()) {
        let line = tokens.join(" ");
        let record = parse_line(&line);
        prop_assert_eq!(record.is_some(), tokens.len() >= 3);
    }

    /// A parsed record uses exactly the first four tokens, with an empty
    /// fourth field for three-token lines.
    #[test]
    fn prop_record_fields_come_from_first_four_tokens(tokens in arb_token_line()) {
        let line = tokens.join(" ");
        if let Some(record) = parse_line(&line) {
            prop_assert_eq!(&record.source, &tokens[0]);
            prop_assert_eq!(&record.destination, &tokens[1]);
            prop_assert_eq!(&record.label1, &tokens[2]);
            let expected_label2 = tokens.get(3).cloned().unwrap_or_default();
            prop_assert_eq!(&record.label2, &expected_label2);
        }
    }

    /// Surrounding whitespace never changes the parse result.
    #[test]
    fn prop_parse_is_trim_invariant(tokens in arb_token_line(), pad in "[ \t]{0,4}") {
        let line = tokens.join(" ");
        let padded = format!("{}{}{}", pad, line, pad);
        prop_assert_eq!(parse_line(&line), parse_line(&padded));
    }

    /// The combined label is always `label1/label2`, trailing slash included
    /// when label2 is empty.
    #[test]
    fn prop_combined_label_shape(tokens in arb_token_line()) {
        let line = tokens.join(" ");
        if let Some(record) = parse_line(&line) {
            let combined = record.combined_label();
            prop_assert_eq!(combined, format!("{}/{}", record.label1, record.label2));
        }
    }

    /// Comment lines never produce records, whatever follows the marker.
    #[test]
    fn prop_comment_lines_always_skipped(rest in ".{0,40}") {
        let line = format!("#{}", rest);
        prop_assert!(parse_line(&line).is_none());
    }
}
