// Rust guideline compliant 2026-02-06

//! Error types for the fsmviz core library.

use thiserror::Error;

/// Result type alias for fsmviz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fsmviz operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF document construction or export error.
    #[error("PDF error: {0}")]
    Pdf(#[from] printpdf::Error),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
