//! Error types for chart rendering

use crate::charts::ChartKind;
use plotters::drawing::DrawingAreaErrorKind;
use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing or rendering charts
#[derive(Error, Debug)]
pub enum ChartError {
    /// The output directory could not be created or is not a directory
    #[error("cannot use output directory '{}': {source}", path.display())]
    OutputDir {
        /// The directory that was requested
        path: PathBuf,
        /// The underlying I/O failure
        source: std::io::Error,
    },

    /// Drawing, encoding or writing a single chart failed
    #[error("failed to render {chart}: {message}")]
    Render {
        /// The chart being rendered
        chart: ChartKind,
        /// Backend error message
        message: String,
    },

    /// Loaded benchmark data is structurally unusable
    #[error("invalid benchmark data: {0}")]
    InvalidData(String),

    /// Keep-going run finished with at least one failed chart
    #[error("{failed} of {total} charts failed to render")]
    Incomplete {
        /// Number of charts that failed
        failed: usize,
        /// Number of charts attempted
        total: usize,
    },

    /// Drawing backend error raised before the chart was attached
    #[error("drawing error: {0}")]
    Drawing(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: StdError + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Drawing(err.to_string())
    }
}

impl ChartError {
    /// Attach the chart identity to a bare drawing error
    pub(crate) fn for_chart(self, chart: ChartKind) -> Self {
        match self {
            ChartError::Drawing(message) => ChartError::Render { chart, message },
            other => other,
        }
    }
}

/// Result type for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_error_display() {
        let error = ChartError::OutputDir {
            path: PathBuf::from("docs/charts"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("docs/charts"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_drawing_error_gets_chart_identity() {
        let error = ChartError::Drawing("backend exploded".to_string()).for_chart(ChartKind::Speedup);
        match &error {
            ChartError::Render { chart, message } => {
                assert_eq!(*chart, ChartKind::Speedup);
                assert_eq!(message, "backend exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(error.to_string().contains("02_speedup.png"));
    }

    #[test]
    fn test_for_chart_keeps_other_variants() {
        let error = ChartError::InvalidData("empty".to_string()).for_chart(ChartKind::Dashboard);
        assert!(matches!(error, ChartError::InvalidData(_)));
    }

    #[test]
    fn test_incomplete_display() {
        let error = ChartError::Incomplete {
            failed: 2,
            total: 6,
        };
        assert_eq!(error.to_string(), "2 of 6 charts failed to render");
    }
}
