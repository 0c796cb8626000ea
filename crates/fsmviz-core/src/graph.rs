// Rust guideline compliant 2026-02-06

//! Automaton graph built from edge records.
//!
//! This module folds the ordered record sequence into a directed graph
//! where each ordered (source, destination) pair carries at most one edge,
//! and derives the textual automaton description (states, alphabet).

use crate::{AutomatonSummary, EdgeLabel, EdgeRecord};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Directed automaton graph.
///
/// Nodes are state names; each ordered pair of states carries at most one
/// edge. A record for an already-present pair silently overwrites the
/// edge's attributes, so multi-edges between the same ordered pair are not
/// representable. Self-loops are allowed and nothing is validated.
pub struct AutomatonGraph {
    /// Petgraph directed graph where nodes are state names and edges carry
    /// the transition labels.
    graph: DiGraph<String, EdgeLabel>,
    /// Map of state names to their NodeIndex in the graph.
    name_to_node: HashMap<String, NodeIndex>,
}

impl AutomatonGraph {
    /// Creates an empty AutomatonGraph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_to_node: HashMap::new(),
        }
    }

    /// Builds a graph from an ordered sequence of edge records.
    ///
    /// # Arguments
    ///
    /// * `records` - Edge records in file order
    ///
    /// # Returns
    ///
    /// A graph where later duplicate (source, destination) records have
    /// overwritten earlier ones.
    pub fn from_records(records: &[EdgeRecord]) -> Self {
        let mut graph = Self::new();
        for record in records {
            graph.upsert_edge(record);
        }
        graph
    }

    /// Inserts or overwrites the edge described by the record.
    ///
    /// Missing endpoint nodes are created. If the ordered pair already has
    /// an edge its attributes are replaced, keeping at most one edge per
    /// pair.
    ///
    /// # Arguments
    ///
    /// * `record` - The edge record to fold in
    pub fn upsert_edge(&mut self, record: &EdgeRecord) {
        let from_idx = self.intern_node(&record.source);
        let to_idx = self.intern_node(&record.destination);
        let label = EdgeLabel::from(record);

        if let Some(edge_idx) = self.graph.find_edge(from_idx, to_idx) {
            self.graph[edge_idx] = label;
        } else {
            self.graph.add_edge(from_idx, to_idx, label);
        }
    }

    /// Returns the NodeIndex for a state name, adding the node if needed.
    fn intern_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.name_to_node.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.name_to_node.insert(name.to_string(), idx);
        idx
    }

    /// Returns the number of states.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns all state names, sorted (Q).
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self
            .graph
            .node_indices()
            .map(|idx| self.graph[idx].clone())
            .collect();
        states.sort();
        states
    }

    /// Returns the sorted set of distinct combined edge labels (Sigma).
    ///
    /// Duplicate labels across edges collapse to one entry.
    pub fn alphabet(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .graph
            .edge_references()
            .map(|edge| edge.weight().combined.clone())
            .collect();
        labels.sort();
        labels.dedup();
        labels
    }

    /// Iterates all edges as (source index, target index, label).
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &EdgeLabel)> {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), edge.weight()))
    }

    /// Iterates all node indices in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// Returns the state name for a node index.
    pub fn node_name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Returns the label attached to the (source, destination) pair, if any.
    pub fn edge_label(&self, source: &str, destination: &str) -> Option<&EdgeLabel> {
        let from_idx = self.name_to_node.get(source)?;
        let to_idx = self.name_to_node.get(destination)?;
        let edge_idx = self.graph.find_edge(*from_idx, *to_idx)?;
        Some(&self.graph[edge_idx])
    }

    /// Derives the automaton description for reporting.
    ///
    /// # Arguments
    ///
    /// * `initial` - Initial state identifier as supplied on the command line
    /// * `finals` - Final state identifiers as supplied on the command line
    ///
    /// # Returns
    ///
    /// The summary with sorted states, the sorted deduplicated alphabet,
    /// and the initial/final identifiers passed through untouched.
    pub fn summary(&self, initial: &str, finals: &[String]) -> AutomatonSummary {
        AutomatonSummary {
            states: self.states(),
            alphabet: self.alphabet(),
            initial: initial.to_string(),
            finals: finals.to_vec(),
        }
    }
}

impl Default for AutomatonGraph {
    fn default() -> Self {
        Self::new()
    }
}
