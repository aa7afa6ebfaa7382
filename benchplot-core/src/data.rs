//! Benchmark data model
//!
//! A [`BenchmarkData`] value carries everything the charts need: the dataset
//! size labels, the sequential and parallel wall-clock times, the reported
//! speedup factors, and a per-stage time breakdown of the largest dataset.
//! It is constructed once and only read afterwards.

use crate::constants::SPEEDUP_TOLERANCE;
use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One dataset size variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSize {
    /// Size of each input file, e.g. `10MB`
    pub per_file: String,
    /// Total input size, e.g. `20MB`
    pub total: String,
    /// Total input size in megabytes, used as a numeric axis
    pub total_mb: f64,
}

impl DatasetSize {
    /// Create a new dataset size
    pub fn new(per_file: impl Into<String>, total: impl Into<String>, total_mb: f64) -> Self {
        Self {
            per_file: per_file.into(),
            total: total.into(),
            total_mb,
        }
    }

    /// Label with both the per-file and the total size
    pub fn detailed_label(&self) -> String {
        format!("{} ({})", self.per_file, self.total)
    }

    /// Label with the total size only
    pub fn simple_label(&self) -> &str {
        &self.total
    }
}

/// Per-stage process times of a single dataset, in both execution modes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessBreakdown {
    /// Name of the dataset this breakdown was measured on
    pub dataset: String,
    /// Pipeline stage names
    pub stages: Vec<String>,
    /// Seconds spent per stage in sequential mode
    pub sequential: Vec<f64>,
    /// Seconds spent per stage in parallel mode
    pub parallel: Vec<f64>,
}

impl ProcessBreakdown {
    /// Total sequential seconds across all stages
    pub fn sequential_total(&self) -> f64 {
        self.sequential.iter().sum()
    }

    /// Total parallel seconds across all stages
    pub fn parallel_total(&self) -> f64 {
        self.parallel.iter().sum()
    }

    fn validate(&self) -> Result<()> {
        if self.stages.is_empty() {
            return Err(ChartError::InvalidData(
                "process breakdown has no stages".to_string(),
            ));
        }

        for (mode, values) in [("sequential", &self.sequential), ("parallel", &self.parallel)] {
            if values.len() != self.stages.len() {
                return Err(ChartError::InvalidData(format!(
                    "process breakdown has {} stages but {} {} values",
                    self.stages.len(),
                    values.len(),
                    mode
                )));
            }
            if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(ChartError::InvalidData(format!(
                    "process breakdown {mode} values must be finite and non-negative"
                )));
            }
            if values.iter().sum::<f64>() <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "process breakdown {mode} total must be positive"
                )));
            }
        }

        Ok(())
    }
}

/// Sequential vs. parallel benchmark results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkData {
    /// Short description of the benchmarked workload
    pub workload: String,
    /// Dataset size variants, in increasing order
    pub datasets: Vec<DatasetSize>,
    /// Sequential execution time per dataset (seconds)
    pub sequential: Vec<f64>,
    /// Parallel execution time per dataset (seconds)
    pub parallel: Vec<f64>,
    /// Reported speedup factor per dataset
    pub speedup: Vec<f64>,
    /// Per-stage breakdown of the largest dataset
    pub breakdown: ProcessBreakdown,
}

impl BenchmarkData {
    /// The FASTP + FastQC + MultiQC pipeline measurements over 8 FASTQ files
    pub fn fastq_pipeline() -> Self {
        Self {
            workload: "8 archivos FASTQ procesados con FASTP + FastQC + MultiQC".to_string(),
            datasets: vec![
                DatasetSize::new("10MB", "20MB", 20.0),
                DatasetSize::new("50MB", "99MB", 99.0),
                DatasetSize::new("100MB", "197MB", 197.0),
                DatasetSize::new("500MB", "984MB", 984.0),
            ],
            sequential: vec![36.8, 48.5, 65.3, 140.0],
            parallel: vec![12.6, 15.1, 18.0, 30.0],
            speedup: vec![2.9, 3.2, 3.6, 4.7],
            breakdown: ProcessBreakdown {
                dataset: "500MB".to_string(),
                stages: vec![
                    "FASTP (8 archivos)".to_string(),
                    "FastQC (8 archivos)".to_string(),
                    "MultiQC".to_string(),
                ],
                sequential: vec![56.0, 64.0, 2.0],
                parallel: vec![11.0, 10.0, 2.0],
            },
        }
    }

    /// Number of dataset size variants
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Whether there are no datasets at all
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Detailed labels, e.g. `10MB (20MB)`
    pub fn detailed_labels(&self) -> Vec<String> {
        self.datasets.iter().map(DatasetSize::detailed_label).collect()
    }

    /// Simple labels, e.g. `20MB`
    pub fn simple_labels(&self) -> Vec<String> {
        self.datasets
            .iter()
            .map(|d| d.simple_label().to_string())
            .collect()
    }

    /// Total sizes in megabytes
    pub fn sizes_mb(&self) -> Vec<f64> {
        self.datasets.iter().map(|d| d.total_mb).collect()
    }

    /// Check structural consistency
    ///
    /// Domain expectations (parallel not slower than sequential, speedup
    /// matching the time ratio) are only logged, since measured data may
    /// legitimately violate them.
    pub fn validate(&self) -> Result<()> {
        let n = self.datasets.len();
        if n == 0 {
            return Err(ChartError::InvalidData("no datasets".to_string()));
        }

        for (name, values) in [
            ("sequential", &self.sequential),
            ("parallel", &self.parallel),
            ("speedup", &self.speedup),
        ] {
            if values.len() != n {
                return Err(ChartError::InvalidData(format!(
                    "{} datasets but {} {} values",
                    n,
                    values.len(),
                    name
                )));
            }
            if values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(ChartError::InvalidData(format!(
                    "{name} values must be finite and positive"
                )));
            }
        }

        if self.datasets.iter().any(|d| !d.total_mb.is_finite() || d.total_mb < 0.0) {
            return Err(ChartError::InvalidData(
                "dataset sizes must be finite and non-negative".to_string(),
            ));
        }

        self.breakdown.validate()?;
        self.warn_on_domain_deviations();

        Ok(())
    }

    fn warn_on_domain_deviations(&self) {
        for (i, dataset) in self.datasets.iter().enumerate() {
            let (seq, par) = (self.sequential[i], self.parallel[i]);
            if par > seq {
                log::warn!(
                    "dataset {}: parallel time {par}s exceeds sequential time {seq}s",
                    dataset.total
                );
            }
            let ratio = seq / par;
            if (ratio - self.speedup[i]).abs() > SPEEDUP_TOLERANCE {
                log::warn!(
                    "dataset {}: reported speedup {} differs from measured ratio {:.2}",
                    dataset.total,
                    self.speedup[i],
                    ratio
                );
            }
        }
    }

    /// Load benchmark data from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let data: Self =
            toml::from_str(content).map_err(|e| ChartError::InvalidData(e.to_string()))?;
        data.validate()?;
        Ok(data)
    }

    /// Load benchmark data from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let data: Self =
            serde_json::from_str(content).map_err(|e| ChartError::InvalidData(e.to_string()))?;
        data.validate()?;
        Ok(data)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ChartError::InvalidData(e.to_string()))
    }
}

impl Default for BenchmarkData {
    fn default() -> Self {
        Self::fastq_pipeline()
    }
}

impl fmt::Display for BenchmarkData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BenchmarkData '{}': {} datasets, breakdown over {} stages ({})",
            self.workload,
            self.datasets.len(),
            self.breakdown.stages.len(),
            self.breakdown.dataset
        )
    }
}
