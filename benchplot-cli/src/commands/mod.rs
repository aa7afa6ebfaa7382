//! CLI command implementations

use clap::Subcommand;

pub mod generate_data;
pub mod render;
pub mod validate;

use benchplot_core::ChartKind;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render all charts (the default when no command is given)
    Render(render::RenderArgs),

    /// List the charts that are rendered, in order
    List,

    /// Write the built-in benchmark data as an editable TOML file
    GenerateData(generate_data::GenerateDataArgs),

    /// Check a benchmark data file without rendering
    Validate(validate::ValidateArgs),
}

/// One line per chart: ordinal, file name and description
pub fn chart_listing() -> Vec<String> {
    ChartKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "{}. {:<28} {}",
                kind.ordinal(),
                kind.file_name(),
                kind.description()
            )
        })
        .collect()
}

/// Print the chart listing
pub fn list_charts() {
    println!("Charts:");
    for line in chart_listing() {
        println!("  {line}");
    }
}
