//! Progress reporting module

use benchplot_core::{ChartError, ChartKind, RenderObserver};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Confirmation line printed once a chart is written
pub fn confirmation_line(kind: ChartKind) -> String {
    format!("✓ Gráfico {}: {}", kind.ordinal(), kind.description())
}

/// Progress reporter for chart rendering
///
/// Confirmation lines always go to stdout; the progress bar (stderr) is only
/// shown when not in quiet mode.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for chart rendering
    pub fn init_charts(&mut self, total_charts: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_charts);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} charts {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Print a line to stdout without tearing the progress bar
    fn print(&self, line: &str) {
        match &self.progress_bar {
            Some(pb) => pb.suspend(|| println!("{line}")),
            None => println!("{line}"),
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

impl RenderObserver for ProgressReporter {
    fn chart_started(&mut self, kind: ChartKind) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Rendering: {}", kind.file_name()));
        }
    }

    fn chart_rendered(&mut self, kind: ChartKind, _path: &Path) {
        self.print(&confirmation_line(kind));
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }

    fn chart_failed(&mut self, kind: ChartKind, error: &ChartError) {
        let line = format!("✗ Gráfico {}: {} ({error})", kind.ordinal(), kind.description());
        match &self.progress_bar {
            Some(pb) => pb.suspend(|| eprintln!("{line}")),
            None => eprintln!("{line}"),
        }
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_lines() {
        assert_eq!(
            confirmation_line(ChartKind::TimeComparison),
            "✓ Gráfico 1: Comparación de tiempos"
        );
        assert_eq!(
            confirmation_line(ChartKind::Distribution),
            "✓ Gráfico 6: Distribución de tiempo"
        );
    }

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_charts(6);
        assert!(reporter.progress_bar.is_none());
        reporter.finish();
    }
}
