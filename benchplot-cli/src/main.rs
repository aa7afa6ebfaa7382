//! Benchplot command-line entry point

use benchplot_cli::commands::{self, render::RenderArgs, Commands};
use benchplot_cli::CliResult;
use clap::Parser;
use std::process::ExitCode;

/// Render sequential vs. parallel benchmark charts as PNG files
#[derive(Debug, Parser)]
#[command(name = "benchplot", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Some(Commands::Render(args)) => args.execute(),
        Some(Commands::List) => {
            commands::list_charts();
            Ok(())
        }
        Some(Commands::GenerateData(args)) => args.execute(),
        Some(Commands::Validate(args)) => args.execute(),
        None => RenderArgs::default().execute(),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
