//! Benchmark data source management for CLI

use crate::error::CliError;
use anyhow::{Context, Result};
use benchplot_core::BenchmarkData;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the benchmark measurements come from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// The built-in FASTQ pipeline measurements
    BuiltIn,
    /// A TOML or JSON data file
    File(PathBuf),
}

impl DataSource {
    /// Data source for an optional `--data` argument
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) => DataSource::File(path.to_path_buf()),
            None => DataSource::BuiltIn,
        }
    }

    /// Get the display name for the data source
    pub fn display_name(&self) -> String {
        match self {
            DataSource::BuiltIn => "Built-in: FASTQ pipeline".to_string(),
            DataSource::File(path) => format!("File: {}", path.display()),
        }
    }

    /// Load and validate the data
    pub fn load(&self) -> Result<BenchmarkData> {
        match self {
            DataSource::BuiltIn => Ok(BenchmarkData::fastq_pipeline()),
            DataSource::File(path) => load_file(path),
        }
    }
}

fn load_file(path: &Path) -> Result<BenchmarkData> {
    if !path.is_file() {
        return Err(CliError::DataFileNotFound(path.display().to_string()).into());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let data = match extension.as_deref() {
        Some("json") => BenchmarkData::from_json_str(&content),
        Some("toml") => BenchmarkData::from_toml_str(&content),
        _ => return Err(CliError::UnsupportedFormat(path.display().to_string()).into()),
    }
    .with_context(|| format!("Failed to load benchmark data from {}", path.display()))?;

    log::info!("Loaded {data}");
    Ok(data)
}
