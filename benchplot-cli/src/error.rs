//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Data file not found or inaccessible
    DataFileNotFound(String),
    /// Data file extension is neither TOML nor JSON
    UnsupportedFormat(String),
    /// Rendering finished without writing every chart
    RenderFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::DataFileNotFound(path) => write!(f, "Data file not found: {path}"),
            CliError::UnsupportedFormat(path) => {
                write!(f, "Unsupported data file format (expected .toml or .json): {path}")
            }
            CliError::RenderFailed(msg) => write!(f, "Rendering failed: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
