//! Rendering run orchestration
//!
//! [`ChartRenderer`] prepares the output directory, derives the metrics once,
//! and renders every chart in order, reporting progress to a
//! [`RenderObserver`]. It never prints; presenting progress is the caller's
//! business.

use crate::charts::ChartKind;
use crate::config::{FailurePolicy, RenderConfig};
use crate::data::BenchmarkData;
use crate::error::{ChartError, Result};
use crate::metrics::DerivedMetrics;
use std::fs;
use std::path::{Path, PathBuf};

/// Callbacks fired while charts are rendered
pub trait RenderObserver {
    /// A chart is about to be rendered
    fn chart_started(&mut self, _kind: ChartKind) {}

    /// A chart was written to `path`
    fn chart_rendered(&mut self, _kind: ChartKind, _path: &Path) {}

    /// A chart failed
    fn chart_failed(&mut self, _kind: ChartKind, _error: &ChartError) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RenderObserver for NoopObserver {}

/// Files written by a successful run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    /// Written charts in render order
    pub written: Vec<(ChartKind, PathBuf)>,
}

impl RenderReport {
    /// Number of written charts
    pub fn len(&self) -> usize {
        self.written.len()
    }

    /// Whether nothing was written
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    /// Written file paths in render order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.written.iter().map(|(_, path)| path.as_path())
    }
}

/// Renders the chart catalogue for one data set
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    config: RenderConfig,
}

impl ChartRenderer {
    /// Create a renderer
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renderer configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Path a chart is written to
    pub fn chart_path(&self, kind: ChartKind) -> PathBuf {
        self.config.output_dir.join(kind.file_name())
    }

    /// Create the output directory if needed
    ///
    /// Succeeds when the directory already exists; fails when the path is
    /// occupied by something that is not a directory.
    pub fn prepare_output_dir(&self) -> Result<()> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|source| ChartError::OutputDir {
            path: dir.clone(),
            source,
        })?;
        if !dir.is_dir() {
            return Err(ChartError::OutputDir {
                path: dir.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "path exists and is not a directory",
                ),
            });
        }
        Ok(())
    }

    /// Render a single chart
    pub fn render_chart(
        &self,
        kind: ChartKind,
        data: &BenchmarkData,
        metrics: &DerivedMetrics,
    ) -> Result<PathBuf> {
        let path = self.chart_path(kind);
        log::debug!("rendering {} into {}", kind, path.display());
        kind.render(&path, data, metrics, self.config.dpi)?;
        Ok(path)
    }

    /// Render every chart in order
    ///
    /// Returns an error if the output directory is unusable (nothing is
    /// rendered then) or if any chart failed. With
    /// [`FailurePolicy::FailFast`] the first chart error is returned and
    /// later charts are not attempted.
    pub fn render_all<O>(&self, data: &BenchmarkData, observer: &mut O) -> Result<RenderReport>
    where
        O: RenderObserver + ?Sized,
    {
        data.validate()?;
        self.prepare_output_dir()?;

        log::info!(
            "rendering {} charts into {}",
            ChartKind::ALL.len(),
            self.config.output_dir.display()
        );

        let metrics = DerivedMetrics::from_data(data);
        let mut report = RenderReport::default();
        let mut failed = 0;

        for kind in ChartKind::ALL {
            observer.chart_started(kind);
            match self.render_chart(kind, data, &metrics) {
                Ok(path) => {
                    observer.chart_rendered(kind, &path);
                    report.written.push((kind, path));
                }
                Err(error) => {
                    log::error!("{error}");
                    observer.chart_failed(kind, &error);
                    match self.config.policy {
                        FailurePolicy::FailFast => return Err(error),
                        FailurePolicy::KeepGoing => failed += 1,
                    }
                }
            }
        }

        if failed > 0 {
            return Err(ChartError::Incomplete {
                failed,
                total: ChartKind::ALL.len(),
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_chart_path_uses_output_dir() {
        let renderer = ChartRenderer::new(RenderConfig::with_output_dir("out/charts"));
        assert_eq!(
            renderer.chart_path(ChartKind::Dashboard),
            PathBuf::from("out/charts/05_dashboard.png")
        );
    }

    #[test]
    fn test_prepare_output_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("docs").join("charts");
        let renderer = ChartRenderer::new(RenderConfig::with_output_dir(&dir));

        renderer.prepare_output_dir().unwrap();
        renderer.prepare_output_dir().unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_prepare_output_dir_rejects_file() {
        let temp = TempDir::new().unwrap();
        let occupied = temp.path().join("charts");
        fs::write(&occupied, b"not a directory").unwrap();
        let renderer = ChartRenderer::new(RenderConfig::with_output_dir(&occupied));

        let err = renderer.prepare_output_dir().unwrap_err();
        assert!(matches!(err, ChartError::OutputDir { .. }));
    }

    #[test]
    fn test_invalid_data_renders_nothing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("charts");
        let renderer = ChartRenderer::new(RenderConfig::with_output_dir(&dir));
        let mut data = BenchmarkData::fastq_pipeline();
        data.speedup.clear();

        let result = renderer.render_all(&data, &mut NoopObserver);
        assert!(matches!(result, Err(ChartError::InvalidData(_))));
        assert!(!dir.exists());
    }

    #[test]
    fn test_report_accessors() {
        let mut report = RenderReport::default();
        assert!(report.is_empty());
        report
            .written
            .push((ChartKind::Speedup, PathBuf::from("a/02_speedup.png")));
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.paths().collect::<Vec<_>>(),
            vec![Path::new("a/02_speedup.png")]
        );
    }
}
