//! Rendering configuration

use crate::constants::{DEFAULT_DPI, DEFAULT_OUTPUT_DIR};
use std::path::{Path, PathBuf};

/// What to do when a single chart fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failed chart and return its error
    #[default]
    FailFast,
    /// Attempt every chart, then report how many failed
    KeepGoing,
}

/// Configuration for a rendering run
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Directory receiving the PNG files
    pub output_dir: PathBuf,
    /// Resolution in dots per inch
    pub dpi: u32,
    /// Failure handling
    pub policy: FailurePolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dpi: DEFAULT_DPI,
            policy: FailurePolicy::FailFast,
        }
    }
}

impl RenderConfig {
    /// Default configuration writing into `output_dir`
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Set the resolution
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi.max(1);
        self
    }

    /// Set the failure policy
    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
