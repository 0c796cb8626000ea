// Rust guideline compliant 2026-02-06

//! Unit tests for the automaton graph builder.
//!
//! These tests validate overwrite-on-duplicate edge semantics, derived
//! states and alphabet, self-loops, and summary passthrough.

use fsmviz_core::{AutomatonGraph, EdgeRecord};

/// Helper to build the three-record example used throughout:
/// A->B x/1, B->C y/2, then A->B overwritten to z/.
fn example_records() -> Vec<EdgeRecord> {
    vec![
        EdgeRecord::new("A", "B", "x", "1"),
        EdgeRecord::new("B", "C", "y", "2"),
        EdgeRecord::new("A", "B", "z", ""),
    ]
}

#[test]
fn test_empty_records_give_empty_graph() {
    let graph = AutomatonGraph::from_records(&[]);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.states().is_empty());
    assert!(graph.alphabet().is_empty());
}

#[test]
fn test_duplicate_pair_overwrites_edge() {
    let graph = AutomatonGraph::from_records(&example_records());

    assert_eq!(graph.edge_count(), 2, "A->B must hold a single edge");
    assert_eq!(graph.states(), vec!["A", "B", "C"]);

    let ab = graph.edge_label("A", "B").expect("A->B edge must exist");
    assert_eq!(ab.combined, "z/", "Later record must win for A->B");
    assert_eq!(ab.label1, "z");
    assert_eq!(ab.label2, "");

    let bc = graph.edge_label("B", "C").expect("B->C edge must exist");
    assert_eq!(bc.combined, "y/2");
}

#[test]
fn test_truncation_to_first_record() {
    let records = example_records();
    let graph = AutomatonGraph::from_records(&records[..1]);

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.states(), vec!["A", "B"]);
    let ab = graph.edge_label("A", "B").expect("A->B edge must exist");
    assert_eq!(ab.combined, "x/1", "Truncation must keep the first record's label");
}

#[test]
fn test_alphabet_is_sorted_and_deduplicated() {
    let records = vec![
        EdgeRecord::new("S", "T", "b", "0"),
        EdgeRecord::new("T", "U", "a", "1"),
        EdgeRecord::new("U", "S", "b", "0"),
    ];
    let graph = AutomatonGraph::from_records(&records);

    assert_eq!(
        graph.alphabet(),
        vec!["a/1", "b/0"],
        "Duplicate combined labels must collapse to one sorted entry"
    );
}

#[test]
fn test_states_are_sorted() {
    let records = vec![
        EdgeRecord::new("Z", "M", "x", ""),
        EdgeRecord::new("A", "Z", "y", ""),
    ];
    let graph = AutomatonGraph::from_records(&records);

    assert_eq!(graph.states(), vec!["A", "M", "Z"]);
}

#[test]
fn test_self_loop_is_allowed() {
    let records = vec![EdgeRecord::new("A", "A", "x", "1")];
    let graph = AutomatonGraph::from_records(&records);

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 1);
    let aa = graph.edge_label("A", "A").expect("Self-loop must exist");
    assert_eq!(aa.combined, "x/1");
}

#[test]
fn test_self_loop_overwrite() {
    let records = vec![
        EdgeRecord::new("A", "A", "x", "1"),
        EdgeRecord::new("A", "A", "y", ""),
    ];
    let graph = AutomatonGraph::from_records(&records);

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_label("A", "A").unwrap().combined, "y/");
}

#[test]
fn test_opposite_directions_are_distinct_edges() {
    let records = vec![
        EdgeRecord::new("A", "B", "x", ""),
        EdgeRecord::new("B", "A", "y", ""),
    ];
    let graph = AutomatonGraph::from_records(&records);

    assert_eq!(graph.edge_count(), 2, "A->B and B->A are different ordered pairs");
    assert_eq!(graph.edge_label("A", "B").unwrap().combined, "x/");
    assert_eq!(graph.edge_label("B", "A").unwrap().combined, "y/");
}

#[test]
fn test_missing_edge_lookup_is_none() {
    let graph = AutomatonGraph::from_records(&example_records());
    assert!(graph.edge_label("A", "C").is_none());
    assert!(graph.edge_label("nope", "B").is_none());
}

#[test]
fn test_summary_passes_identifiers_through() {
    let graph = AutomatonGraph::from_records(&example_records());
    let finals = vec!["C".to_string(), "C".to_string(), "Ghost".to_string()];

    let summary = graph.summary("NotAState", &finals);

    assert_eq!(summary.states, vec!["A", "B", "C"]);
    assert_eq!(summary.alphabet, vec!["y/2", "z/"]);
    assert_eq!(
        summary.initial, "NotAState",
        "The initial identifier is reported as given, not validated"
    );
    assert_eq!(
        summary.finals, finals,
        "Final identifiers are reported as given: no dedup, no validation"
    );
}
