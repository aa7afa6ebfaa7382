//! Validate command implementation

use crate::data_source::DataSource;
use anyhow::Result;
use benchplot_core::DerivedMetrics;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the benchmark data file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub data: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating benchmark data: {}", self.data.display());

        match DataSource::File(self.data.clone()).load() {
            Ok(data) => {
                let metrics = DerivedMetrics::from_data(&data);
                println!("✓ Benchmark data is valid!");
                println!("  Workload: {}", data.workload);
                println!("  Datasets: {}", data.simple_labels().join(", "));
                let best = metrics
                    .improvement_pct
                    .iter()
                    .copied()
                    .fold(f64::NEG_INFINITY, f64::max);
                println!("  Best improvement: {best:.1}%");
                Ok(())
            }
            Err(e) => {
                println!("✗ Benchmark data is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchplot_core::BenchmarkData;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            data: PathBuf::from("bench.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("bench.toml"));
    }

    #[test]
    fn test_validate_valid_data() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bench.toml");
        fs::write(
            &path,
            BenchmarkData::fastq_pipeline().to_toml_string().unwrap(),
        )
        .unwrap();

        let args = ValidateArgs { data: path };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_mismatched_lengths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bench.json");
        let mut data = BenchmarkData::fastq_pipeline();
        data.parallel.pop();
        fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();

        let args = ValidateArgs { data: path };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            data: PathBuf::from("nonexistent.toml"),
        };
        assert!(args.execute().is_err());
    }
}
