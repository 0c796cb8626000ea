// Rust guideline compliant 2026-02-06

//! Configuration management for fsmviz.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for the automaton summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    Table,
    /// Plain text format.
    #[default]
    Plain,
}

/// Configuration for fsmviz rendering and reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seed for the spring layout RNG.
    #[serde(default = "default_layout_seed")]
    pub layout_seed: u64,

    /// Number of spring layout iterations.
    #[serde(default = "default_layout_iterations")]
    pub layout_iterations: usize,

    /// Node circle radius in millimeters.
    #[serde(default = "default_node_radius_mm")]
    pub node_radius_mm: f32,

    /// Font size for state names, in points.
    #[serde(default = "default_node_font_size")]
    pub node_font_size: f32,

    /// Font size for edge labels, in points.
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f32,

    /// Default output format for the summary.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Default layout seed; fixed so repeated runs produce identical diagrams.
fn default_layout_seed() -> u64 {
    42
}

/// Default number of layout iterations.
fn default_layout_iterations() -> usize {
    50
}

/// Default node radius in millimeters.
fn default_node_radius_mm() -> f32 {
    6.0
}

/// Default state-name font size in points.
fn default_node_font_size() -> f32 {
    10.0
}

/// Default edge-label font size in points.
fn default_label_font_size() -> f32 {
    9.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout_seed: default_layout_seed(),
            layout_iterations: default_layout_iterations(),
            node_radius_mm: default_node_radius_mm(),
            node_font_size: default_node_font_size(),
            label_font_size: default_label_font_size(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/fsmviz.toml`
    /// 3. Environment variables with `FSMVIZ_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory containing `fsmviz.toml`
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        // Try to load from config file
        let config_path = dir.join("fsmviz.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_config: Config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
            config = file_config;
        }

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FSMVIZ_LAYOUT_SEED` - Layout RNG seed
    /// - `FSMVIZ_LAYOUT_ITERATIONS` - Number of layout iterations
    /// - `FSMVIZ_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Returns
    ///
    /// Ok if all environment variables are valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("FSMVIZ_LAYOUT_SEED") {
            self.layout_seed = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("FSMVIZ_LAYOUT_SEED must be a number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("FSMVIZ_LAYOUT_ITERATIONS") {
            self.layout_iterations = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "FSMVIZ_LAYOUT_ITERATIONS must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("FSMVIZ_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "FSMVIZ_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Returns
    ///
    /// Ok if all values are valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - layout_iterations is zero
    /// - node_radius_mm or either font size is not positive
    fn validate(&self) -> Result<()> {
        if self.layout_iterations == 0 {
            return Err(crate::Error::InvalidConfig(
                "layout_iterations must be greater than 0".to_string(),
            ));
        }

        if self.node_radius_mm <= 0.0 {
            return Err(crate::Error::InvalidConfig(format!(
                "node_radius_mm must be positive, got {}",
                self.node_radius_mm
            )));
        }

        if self.node_font_size <= 0.0 || self.label_font_size <= 0.0 {
            return Err(crate::Error::InvalidConfig(
                "font sizes must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory to write `fsmviz.toml` into
    ///
    /// # Returns
    ///
    /// Ok if the file was written successfully, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join("fsmviz.toml");
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
