//! Chart catalogue
//!
//! The six charts are rendered independently, in the order of
//! [`ChartKind::ALL`]. Each one reads the benchmark data and its derived
//! metrics and writes a single PNG file.

mod bars;
pub(crate) mod canvas;
mod dashboard;
mod lines;
mod proportion;

pub use canvas::Figure;

use crate::data::BenchmarkData;
use crate::error::Result;
use crate::metrics::DerivedMetrics;
use canvas::{render_png, Scale};
use std::fmt;
use std::path::Path;

/// The charts produced by a rendering run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Grouped sequential/parallel bars per dataset
    TimeComparison,
    /// Speedup factor per dataset with a baseline at 1x
    Speedup,
    /// Seconds saved per dataset
    TimeSaved,
    /// Execution time against data size, one line per mode
    Scalability,
    /// 2x2 summary grid
    Dashboard,
    /// Per-stage time proportions of the largest dataset
    Distribution,
}

impl ChartKind {
    /// Every chart, in render order
    pub const ALL: [ChartKind; 6] = [
        ChartKind::TimeComparison,
        ChartKind::Speedup,
        ChartKind::TimeSaved,
        ChartKind::Scalability,
        ChartKind::Dashboard,
        ChartKind::Distribution,
    ];

    /// 1-based position in the render order
    pub fn ordinal(self) -> usize {
        match self {
            ChartKind::TimeComparison => 1,
            ChartKind::Speedup => 2,
            ChartKind::TimeSaved => 3,
            ChartKind::Scalability => 4,
            ChartKind::Dashboard => 5,
            ChartKind::Distribution => 6,
        }
    }

    /// Output file name
    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::TimeComparison => "01_comparacion_tiempos.png",
            ChartKind::Speedup => "02_speedup.png",
            ChartKind::TimeSaved => "03_tiempo_ahorrado.png",
            ChartKind::Scalability => "04_escalabilidad.png",
            ChartKind::Dashboard => "05_dashboard.png",
            ChartKind::Distribution => "06_distribucion_tiempo.png",
        }
    }

    /// Human readable name used in confirmation messages
    pub fn description(self) -> &'static str {
        match self {
            ChartKind::TimeComparison => "Comparación de tiempos",
            ChartKind::Speedup => "Speedup",
            ChartKind::TimeSaved => "Tiempo ahorrado",
            ChartKind::Scalability => "Escalabilidad",
            ChartKind::Dashboard => "Dashboard completo",
            ChartKind::Distribution => "Distribución de tiempo",
        }
    }

    /// Figure size
    pub fn figure(self) -> Figure {
        match self {
            ChartKind::TimeComparison => Figure::new(12.0, 7.0),
            ChartKind::Speedup | ChartKind::TimeSaved | ChartKind::Scalability => {
                Figure::new(10.0, 6.0)
            }
            ChartKind::Dashboard => Figure::new(14.0, 10.0),
            ChartKind::Distribution => Figure::new(12.0, 5.0),
        }
    }

    /// Render this chart into `path`
    pub fn render(
        self,
        path: &Path,
        data: &BenchmarkData,
        metrics: &DerivedMetrics,
        dpi: u32,
    ) -> Result<()> {
        let scale = Scale::new(dpi);
        render_png(path, self.figure(), scale, |area| match self {
            ChartKind::TimeComparison => bars::time_comparison(area, data, scale),
            ChartKind::Speedup => bars::speedup(area, data, scale),
            ChartKind::TimeSaved => bars::time_saved(area, data, metrics, scale),
            ChartKind::Scalability => lines::scalability(area, data, scale),
            ChartKind::Dashboard => dashboard::dashboard(area, data, metrics, scale),
            ChartKind::Distribution => proportion::distribution(area, data, metrics, scale),
        })
        .map_err(|e| e.for_chart(self))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// `36.8s`
pub(crate) fn seconds_label(value: f64) -> String {
    format!("{value:.1}s")
}

/// `110s`
pub(crate) fn whole_seconds_label(value: f64) -> String {
    format!("{value:.0}s")
}

/// `2.9x`
pub(crate) fn speedup_label(value: f64) -> String {
    format!("{value:.1}x")
}

/// `79%`
pub(crate) fn percent_label(value: f64) -> String {
    format!("{value:.0}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_render_order_and_ordinals() {
        let ordinals: Vec<usize> = ChartKind::ALL.iter().map(|k| k.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_file_names_are_unique_pngs() {
        let names: HashSet<&str> = ChartKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names.len(), 6);
        for kind in ChartKind::ALL {
            assert!(kind.file_name().ends_with(".png"));
            assert!(kind
                .file_name()
                .starts_with(&format!("{:02}_", kind.ordinal())));
        }
    }

    #[test]
    fn test_figure_sizes() {
        assert_eq!(ChartKind::TimeComparison.figure(), Figure::new(12.0, 7.0));
        assert_eq!(ChartKind::Dashboard.figure().pixels(150), (2100, 1500));
        assert_eq!(ChartKind::Distribution.figure().pixels(150), (1800, 750));
    }

    #[test]
    fn test_display_is_file_name() {
        assert_eq!(ChartKind::Scalability.to_string(), "04_escalabilidad.png");
    }

    #[test]
    fn test_value_labels() {
        assert_eq!(seconds_label(36.8), "36.8s");
        assert_eq!(seconds_label(140.0), "140.0s");
        assert_eq!(whole_seconds_label(110.0), "110s");
        assert_eq!(whole_seconds_label(24.2), "24s");
        assert_eq!(speedup_label(2.9), "2.9x");
        assert_eq!(percent_label(78.57), "79%");
    }
}
