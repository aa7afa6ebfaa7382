//! Derived benchmark metrics
//!
//! Everything here is elementary arithmetic over index-aligned slices; the
//! functions never allocate more than their output vector.

use crate::data::BenchmarkData;

/// Seconds saved by parallel execution, per dataset
pub fn time_saved(sequential: &[f64], parallel: &[f64]) -> Vec<f64> {
    sequential
        .iter()
        .zip(parallel)
        .map(|(seq, par)| seq - par)
        .collect()
}

/// Reduction of execution time in percent, per dataset
pub fn improvement_pct(sequential: &[f64], parallel: &[f64]) -> Vec<f64> {
    sequential
        .iter()
        .zip(parallel)
        .map(|(seq, par)| {
            if *seq > 0.0 {
                (seq - par) / seq * 100.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Measured speedup (sequential / parallel), per dataset
pub fn measured_speedup(sequential: &[f64], parallel: &[f64]) -> Vec<f64> {
    sequential
        .iter()
        .zip(parallel)
        .map(|(seq, par)| if *par > 0.0 { seq / par } else { 0.0 })
        .collect()
}

/// Percentage share of each value in the total
pub fn shares_pct(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / total * 100.0).collect()
}

/// All derived series for one data set
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    /// Sequential minus parallel seconds
    pub time_saved: Vec<f64>,
    /// Time reduction in percent
    pub improvement_pct: Vec<f64>,
    /// Sequential / parallel ratio
    pub measured_speedup: Vec<f64>,
    /// Stage shares of the sequential breakdown
    pub sequential_shares: Vec<f64>,
    /// Stage shares of the parallel breakdown
    pub parallel_shares: Vec<f64>,
}

impl DerivedMetrics {
    /// Compute every derived series
    pub fn from_data(data: &BenchmarkData) -> Self {
        Self {
            time_saved: time_saved(&data.sequential, &data.parallel),
            improvement_pct: improvement_pct(&data.sequential, &data.parallel),
            measured_speedup: measured_speedup(&data.sequential, &data.parallel),
            sequential_shares: shares_pct(&data.breakdown.sequential),
            parallel_shares: shares_pct(&data.breakdown.parallel),
        }
    }
}
