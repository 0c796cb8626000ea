// Rust guideline compliant 2026-02-06

//! Core data models for fsmviz.

use serde::{Deserialize, Serialize};

/// One labeled transition parsed from the edge-list file.
///
/// A record corresponds to a single non-blank, non-comment input line with
/// at least three whitespace-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Source state name.
    pub source: String,
    /// Destination state name.
    pub destination: String,
    /// Primary transition label.
    pub label1: String,
    /// Secondary transition label; empty when the input line had exactly
    /// three tokens.
    pub label2: String,
}

impl EdgeRecord {
    /// Creates a new EdgeRecord.
    ///
    /// # Arguments
    ///
    /// * `source` - Source state name
    /// * `destination` - Destination state name
    /// * `label1` - Primary transition label
    /// * `label2` - Secondary transition label (may be empty)
    ///
    /// # Returns
    ///
    /// A new EdgeRecord instance.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        label1: impl Into<String>,
        label2: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            label1: label1.into(),
            label2: label2.into(),
        }
    }

    /// Returns the combined display label, `label1/label2`.
    ///
    /// An empty `label2` still produces the trailing slash (`a` + `` ->
    /// `a/`), matching how labels appear in the rendered diagram and in
    /// the alphabet.
    pub fn combined_label(&self) -> String {
        format!("{}/{}", self.label1, self.label2)
    }
}

/// Attributes carried by one graph edge.
///
/// Duplicate (source, destination) records overwrite this wholesale, so the
/// label always reflects the last surviving input record for the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLabel {
    /// Combined `label1/label2` display label.
    pub combined: String,
    /// Primary transition label.
    pub label1: String,
    /// Secondary transition label (may be empty).
    pub label2: String,
}

impl From<&EdgeRecord> for EdgeLabel {
    fn from(record: &EdgeRecord) -> Self {
        Self {
            combined: record.combined_label(),
            label1: record.label1.clone(),
            label2: record.label2.clone(),
        }
    }
}

/// Display classification of a node in the rendered diagram.
///
/// The initial check wins: a state that is both the initial state and a
/// final state is classified `Initial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// The externally supplied initial state (drawn green).
    Initial,
    /// A member of the externally supplied final-state set (drawn red).
    Final,
    /// Any other state (drawn light blue).
    Plain,
}

impl NodeRole {
    /// Classifies a state name against the supplied initial/final identifiers.
    ///
    /// # Arguments
    ///
    /// * `name` - The state name to classify
    /// * `initial` - The initial-state identifier
    /// * `finals` - The final-state identifiers
    ///
    /// # Returns
    ///
    /// The display role for the state. Neither identifier set is validated
    /// against the graph's node set.
    pub fn classify(name: &str, initial: &str, finals: &[String]) -> Self {
        if name == initial {
            NodeRole::Initial
        } else if finals.iter().any(|f| f == name) {
            NodeRole::Final
        } else {
            NodeRole::Plain
        }
    }

    /// Returns the fill color for this role as an RGB triple in `0.0..=1.0`.
    pub fn color(self) -> (f32, f32, f32) {
        match self {
            // green
            NodeRole::Initial => (0.0, 0.5, 0.0),
            // red
            NodeRole::Final => (1.0, 0.0, 0.0),
            // lightblue
            NodeRole::Plain => (0.678, 0.847, 0.902),
        }
    }
}

/// Derived description of the automaton, printed after rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomatonSummary {
    /// All state names, sorted (Q).
    pub states: Vec<String>,
    /// Distinct combined edge labels, sorted (Sigma).
    pub alphabet: Vec<String>,
    /// Initial state identifier as supplied (q0), not validated.
    pub initial: String,
    /// Final state identifiers as supplied (F), not deduplicated and not
    /// validated as a subset of Q.
    pub finals: Vec<String>,
}
