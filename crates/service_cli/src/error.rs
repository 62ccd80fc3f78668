//! CLI error types.

use pricer_core::types::OptionError;
use thiserror::Error;

/// Errors surfaced by the command line driver.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input rejected by the pricing library
    #[error("Pricing error: {0}")]
    Option(#[from] OptionError),

    /// Configuration failed to load or validate
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML input could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV output failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text formatting failure
    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
