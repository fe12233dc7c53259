//! CLI module for coldcost.
//!
//! Thin glue between command-line flags and the calculator; all pricing
//! logic lives in the library modules.

pub mod commands;
pub mod util;

use clap::{Args, Parser, Subcommand};

/// coldcost - Estimate tiered cold-storage costs.
#[derive(Parser)]
#[command(
    name = "coldcost",
    version,
    about = "Estimate tiered cold-storage costs"
)]
pub struct Cli {
    /// Explicit config file instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate storage, retrieval, deletion, and transfer costs.
    Estimate(EstimateArgs),
    /// Print the rate tables.
    Rates {
        /// Only this region
        #[arg(long)]
        region: Option<String>,
    },
    /// List known region codes.
    Regions,
}

/// Parameters for the `estimate` command, one flag per input field.
#[derive(Args)]
pub struct EstimateArgs {
    /// Region code (us-east, us-west-1, us-west-2, europe, asia)
    #[arg(long)]
    pub region: Option<String>,
    /// GB currently stored
    #[arg(long, value_name = "GB")]
    pub stored: Option<f64>,
    /// Days the stored data has been held
    #[arg(long, value_name = "DAYS")]
    pub stored_days: Option<f64>,
    /// GB to retrieve
    #[arg(long, value_name = "GB")]
    pub retrieve: Option<f64>,
    /// Retrieval window in hours (the service enforces a minimum)
    #[arg(long, value_name = "HOURS")]
    pub window: Option<f64>,
    /// GB deleted before the retention commitment
    #[arg(long, value_name = "GB")]
    pub deleted: Option<f64>,
    /// Days the deleted data was held
    #[arg(long, value_name = "DAYS")]
    pub deleted_days: Option<f64>,
    /// Read parameters from a TOML file (flags override it)
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,
    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

pub use commands::{cmd_estimate, cmd_rates, cmd_regions};
pub use util::{expand_path, resolve_region};
