// Rust guideline compliant 2026-02-06

//! Implementation of the fsmviz run pipeline.
//!
//! One invocation handles exactly one automaton: load the edge list, apply
//! the optional truncation, fold the records into the graph, render the PDF,
//! and print the derived automaton description.

use crate::OutputFormatter;
use anyhow::Result;
use fsmviz_core::{read_edges, render_pdf, AutomatonGraph, Config, RenderStyle};
use std::path::Path;

/// Runs the full load -> build -> render -> report pipeline.
///
/// # Arguments
///
/// * `edges` - Path to the edge-list file
/// * `max_edges` - Optional cap on parsed records; 0 behaves like no cap
/// * `inicial` - Initial-state identifier for coloring and reporting
/// * `finales` - Final-state identifiers for coloring and reporting
/// * `output` - Output PDF path; the directory must already exist
/// * `config` - Loaded configuration (layout seed, sizes, fonts)
/// * `formatter` - Formatter for the automaton summary
///
/// # Returns
///
/// Ok after the PDF has been written and the summary printed.
///
/// # Errors
///
/// Returns an error if:
/// - The edge-list file is missing or unreadable
/// - The output file cannot be created (e.g. missing directory)
/// - PDF serialization fails
///
/// A missing input file fails before any output file is written.
pub fn execute(
    edges: &Path,
    max_edges: Option<usize>,
    inicial: &str,
    finales: &[String],
    output: &Path,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let graph = load_graph(edges, max_edges)?;

    let style = RenderStyle::from_config(config);
    render_pdf(&graph, &style, inicial, finales, output)?;
    println!("PDF written: {}", output.display());

    let summary = graph.summary(inicial, finales);
    println!("{}", formatter.format_summary(&summary));

    Ok(())
}

/// Loads the edge list and folds it into the graph, applying the optional
/// record cap.
///
/// # Arguments
///
/// * `edges` - Path to the edge-list file
/// * `max_edges` - Optional cap on parsed records; 0 behaves like no cap
///
/// # Returns
///
/// The automaton graph built from the (possibly truncated) records.
///
/// # Errors
///
/// Returns an error if the edge-list file is missing or unreadable.
fn load_graph(edges: &Path, max_edges: Option<usize>) -> Result<AutomatonGraph> {
    let mut records = read_edges(edges)?;

    // A zero cap means "no limit", same as the unset case.
    if let Some(n) = max_edges {
        if n > 0 {
            records.truncate(n);
        }
    }

    Ok(AutomatonGraph::from_records(&records))
}
