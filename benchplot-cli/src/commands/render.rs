//! Render command implementation

use crate::data_source::DataSource;
use crate::error::CliError;
use crate::progress::ProgressReporter;
use anyhow::Result;
use benchplot_core::constants::{DEFAULT_DPI, DEFAULT_OUTPUT_DIR};
use benchplot_core::{ChartError, ChartKind, ChartRenderer, FailurePolicy, RenderConfig};
use clap::Args;
use std::path::{Path, PathBuf};

/// Width of the completion banner rules
const BANNER_WIDTH: usize = 50;

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Directory receiving the PNG files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Benchmark data file (.toml or .json); built-in data when omitted
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Image resolution in dots per inch
    #[arg(long, value_name = "DPI", default_value_t = DEFAULT_DPI, value_parser = clap::value_parser!(u32).range(1..))]
    pub dpi: u32,

    /// Keep rendering the remaining charts after a failure
    #[arg(short, long)]
    pub keep_going: bool,

    /// Suppress progress bar and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            data: None,
            dpi: DEFAULT_DPI,
            keep_going: false,
            quiet: false,
            verbose: 0,
        }
    }
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting chart rendering");
        log::debug!("Arguments: {:?}", self);

        let source = DataSource::from_arg(self.data.as_deref());
        log::info!("Data source: {}", source.display_name());
        let data = source.load()?;

        let renderer = ChartRenderer::new(self.render_config());
        let mut reporter = ProgressReporter::new(self.quiet);
        reporter.init_charts(ChartKind::ALL.len() as u64);
        let result = renderer.render_all(&data, &mut reporter);
        reporter.finish();

        match result {
            Ok(report) => {
                log::info!("Wrote {} charts", report.len());
                for line in completion_banner(&self.output_dir) {
                    println!("{line}");
                }
                Ok(())
            }
            Err(err @ ChartError::OutputDir { .. }) => Err(err.into()),
            Err(err) => Err(CliError::RenderFailed(err.to_string()).into()),
        }
    }

    /// Rendering configuration from the arguments
    pub fn render_config(&self) -> RenderConfig {
        let policy = if self.keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::FailFast
        };
        RenderConfig::with_output_dir(&self.output_dir)
            .dpi(self.dpi)
            .policy(policy)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when executed more than once in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Blank line, rule, completion message, rule
pub fn completion_banner(output_dir: &Path) -> Vec<String> {
    let rule = "=".repeat(BANNER_WIDTH);
    let dir = output_dir.display().to_string();
    let dir = if dir.ends_with('/') { dir } else { format!("{dir}/") };
    vec![
        String::new(),
        rule.clone(),
        format!("✅ Todos los gráficos generados en {dir}"),
        rule,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_banner() {
        let banner = completion_banner(Path::new("docs/charts"));
        assert_eq!(banner.len(), 4);
        assert_eq!(banner[0], "");
        assert_eq!(banner[1], "=".repeat(50));
        assert_eq!(banner[2], "✅ Todos los gráficos generados en docs/charts/");
        assert_eq!(banner[3], banner[1]);
    }

    #[test]
    fn test_banner_keeps_trailing_slash() {
        let banner = completion_banner(Path::new("out/"));
        assert_eq!(banner[2], "✅ Todos los gráficos generados en out/");
    }

    #[test]
    fn test_default_args_match_reference_run() {
        let args = RenderArgs::default();
        let config = args.render_config();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_keep_going_sets_policy() {
        let args = RenderArgs {
            keep_going: true,
            dpi: 72,
            ..RenderArgs::default()
        };
        let config = args.render_config();
        assert_eq!(config.policy, FailurePolicy::KeepGoing);
        assert_eq!(config.dpi, 72);
    }
}
