//! Command-line front end for the coldcost pricing engine.
//!
//! Usage:
//!   coldcost estimate --stored 300 --stored-days 30    Estimate costs
//!   coldcost estimate --file params.toml --json        Estimate from a file
//!   coldcost rates [--region asia]                     Show rate tables
//!   coldcost regions                                   List region codes

use clap::Parser;
use coldcost::cli::{Cli, Command, cmd_estimate, cmd_rates, cmd_regions, expand_path};
use coldcost::config::Config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr under RUST_LOG control; estimates always
    // print to stdout so the output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Config supplies the default region and retrieval policy; it must
    // load before any command runs.
    let config = match &cli.config {
        Some(path) => Config::load_from(&expand_path(path)),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &cli.command {
        Command::Estimate(args) => cmd_estimate(args, &config),
        Command::Rates { region } => cmd_rates(region.as_deref()),
        Command::Regions => cmd_regions(),
    }
}
