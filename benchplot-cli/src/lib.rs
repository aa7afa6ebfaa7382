//! Benchplot CLI library
//!
//! This library provides the command-line interface for rendering the
//! sequential vs. parallel benchmark charts.

pub mod commands;
pub mod data_source;
pub mod error;
pub mod progress;

pub use error::{CliError, CliResult};
