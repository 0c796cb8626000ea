// Rust guideline compliant 2026-02-06

//! fsmviz Core Library
//!
//! This crate provides the foundational components for the fsmviz automaton
//! diagram renderer:
//! - Data models (EdgeRecord, EdgeLabel, NodeRole, AutomatonSummary)
//! - Edge-list file loader (whitespace-token line format)
//! - Graph builder (petgraph-backed, overwrite-on-duplicate edges)
//! - Seeded force-directed layout
//! - PDF rendering (node/edge/label drawing, tight-cropped page)
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod loader;
pub mod models;
pub mod render;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use graph::AutomatonGraph;
pub use layout::spring_layout;
pub use loader::read_edges;
pub use models::{AutomatonSummary, EdgeLabel, EdgeRecord, NodeRole};
pub use render::{render_pdf, RenderStyle};
