// Rust guideline compliant 2026-02-06

//! fsmviz CLI Application
//!
//! Command-line interface for rendering automaton transition tables as PDF
//! diagrams.

use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::should_use_color;

#[derive(Parser, Debug)]
#[command(
    name = "fsmviz",
    version,
    about = "fsmviz: render an automaton transition table as a PDF diagram",
    long_about = "fsmviz reads a flat text file of labeled transitions (one \"source destination label1 [label2]\" line per edge), builds the automaton graph, renders it as a PDF with the initial and final states highlighted, and prints the derived description (states, alphabet, initial state, final states).",
    after_help = "Examples:\n  fsmviz\n  fsmviz --edges mis_aristas.txt --inicial A --finales F G\n  fsmviz --edges turnstile.txt --max-edges 10 --format json\n"
)]
struct Cli {
    /// Input edge-list file
    #[arg(long, default_value = "mis_aristas.txt")]
    edges: PathBuf,

    /// Truncate to the first N parsed edges (0 means no limit)
    #[arg(long)]
    max_edges: Option<usize>,

    /// Initial-state identifier, drawn green
    #[arg(long, default_value = "A")]
    inicial: String,

    /// Final-state identifiers, drawn red
    #[arg(long, num_args = 1.., default_values_t = vec!["F".to_string()])]
    finales: Vec<String>,

    /// Output PDF path (the directory must already exist)
    #[arg(long, default_value = "./pdfs/automata.pdf")]
    output: PathBuf,

    /// Summary output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Directory containing fsmviz.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_dir = cli.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = fsmviz_core::Config::load(&config_dir)?;

    // Determine output format and color usage
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => match config.output_format {
            fsmviz_core::OutputFormat::Json => "json",
            fsmviz_core::OutputFormat::Table => "table",
            fsmviz_core::OutputFormat::Plain => "plain",
        },
    };
    let formatter = create_formatter(format, use_color);

    commands::execute(
        &cli.edges,
        cli.max_edges,
        &cli.inicial,
        &cli.finales,
        &cli.output,
        &config,
        formatter.as_ref(),
    )?;

    Ok(())
}
