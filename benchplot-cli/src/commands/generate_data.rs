//! Generate data command implementation

use anyhow::{Context, Result};
use benchplot_core::BenchmarkData;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-data command
#[derive(Debug, Args)]
pub struct GenerateDataArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateDataArgs {
    /// Execute the generate-data command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating benchmark data file...");
        println!("  Output file: {}", self.output.display());

        let content = self.generate_template()?;

        fs::write(&self.output, content)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Benchmark data generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Replace the measurements with your own runs");
        println!("2. Validate your data:");
        println!("   benchplot validate -d {}", self.output.display());
        println!("3. Render the charts:");
        println!("   benchplot render -d {}", self.output.display());

        Ok(())
    }

    /// Built-in measurements as TOML with an explanatory header
    fn generate_template(&self) -> Result<String> {
        let body = BenchmarkData::fastq_pipeline()
            .to_toml_string()
            .context("Failed to serialize built-in benchmark data")?;
        Ok(format!(
            "# Benchmark measurements for benchplot\n\
             #\n\
             # sequential, parallel and speedup hold one entry per dataset.\n\
             # Times are in seconds; total_mb drives the scalability x axis.\n\n\
             {body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_data_args_debug() {
        let args = GenerateDataArgs {
            output: PathBuf::from("bench.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateDataArgs"));
        assert!(debug_str.contains("bench.toml"));
    }

    #[test]
    fn test_template_parses_back() {
        let args = GenerateDataArgs {
            output: PathBuf::from("unused.toml"),
        };
        let template = args.generate_template().unwrap();
        assert!(template.starts_with("# Benchmark measurements"));

        let data = BenchmarkData::from_toml_str(&template).unwrap();
        assert_eq!(data, BenchmarkData::fastq_pipeline());
    }

    #[test]
    fn test_execute_writes_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("bench.toml");
        let args = GenerateDataArgs {
            output: output.clone(),
        };

        args.execute().unwrap();
        assert!(output.is_file());
    }

    #[test]
    fn test_execute_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let args = GenerateDataArgs {
            output: temp.path().join("missing").join("bench.toml"),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
