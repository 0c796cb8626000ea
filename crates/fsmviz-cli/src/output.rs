// Rust guideline compliant 2026-02-06

//! Output formatting module for the fsmviz CLI.
//!
//! This module provides functionality for formatting the derived automaton
//! description in various output formats (JSON, table, plain text).

use fsmviz_core::AutomatonSummary;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting the automaton description in
/// different output formats.
pub trait OutputFormatter {
    /// Formats the automaton summary for display.
    ///
    /// # Arguments
    /// * `summary` - The derived automaton description
    ///
    /// # Returns
    /// A formatted string representation of the summary
    fn format_summary(&self, summary: &AutomatonSummary) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats the summary as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_summary(&self, summary: &AutomatonSummary) -> String {
        serde_json::to_string_pretty(summary)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize summary" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats the summary as a human-readable table.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_summary(&self, summary: &AutomatonSummary) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field".to_string(), "Value".to_string()]);
        builder.push_record(["States (Q)".to_string(), summary.states.join(", ")]);
        builder.push_record(["Alphabet (Σ)".to_string(), summary.alphabet.join(", ")]);
        builder.push_record(["Initial state (q0)".to_string(), summary.initial.clone()]);
        builder.push_record(["Final states (F)".to_string(), summary.finals.join(", ")]);

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            let mut output = Vec::new();
            let mut stderr = StandardStream::stderr(ColorChoice::Auto);
            let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(output, "Error: ");
            let _ = stderr.reset();
            let _ = write!(output, "{}", error);
            String::from_utf8_lossy(&output).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats the summary as the classic console banner.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_summary(&self, summary: &AutomatonSummary) -> String {
        let mut output = String::new();

        output.push_str("===== AUTOMATON DESCRIPTION =====\n");
        output.push_str(&format!("States (Q): {}\n", summary.states.join(", ")));
        output.push_str(&format!("Alphabet (Σ): {}\n", summary.alphabet.join(", ")));
        output.push_str(&format!("Initial state (q0): {}\n", summary.initial));
        output.push_str(&format!("Final states (F): {}\n", summary.finals.join(", ")));
        output.push_str("=================================");

        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "table" => Box::new(TableFormatter::new(use_color)),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(PlainFormatter),
    }
}
