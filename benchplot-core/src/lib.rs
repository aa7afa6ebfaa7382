//! Benchmark chart rendering
//!
//! This crate turns a set of sequential vs. parallel benchmark measurements
//! into six PNG charts: grouped time bars, speedup, time saved, scalability
//! lines, a 2x2 dashboard and a per-stage proportion chart.
//!
//! ```no_run
//! use benchplot_core::{BenchmarkData, ChartRenderer, NoopObserver, RenderConfig};
//!
//! let renderer = ChartRenderer::new(RenderConfig::default());
//! let report = renderer
//!     .render_all(&BenchmarkData::fastq_pipeline(), &mut NoopObserver)
//!     .unwrap();
//! assert_eq!(report.len(), 6);
//! ```

#![warn(missing_docs)]

pub mod charts;
pub mod config;
#[allow(missing_docs)]
pub mod constants;
pub mod data;
pub mod error;
pub mod metrics;
pub mod renderer;

pub use charts::{ChartKind, Figure};
pub use config::{FailurePolicy, RenderConfig};
pub use data::{BenchmarkData, DatasetSize, ProcessBreakdown};
pub use error::{ChartError, Result};
pub use metrics::DerivedMetrics;
pub use renderer::{ChartRenderer, NoopObserver, RenderObserver, RenderReport};
