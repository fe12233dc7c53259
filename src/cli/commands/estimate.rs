//! Estimate command: builds the input record from flags (or a TOML
//! parameter file) and prints the cost breakdown.

use crate::cli::EstimateArgs;
use crate::cli::util::{expand_path, resolve_region};
use crate::config::Config;
use crate::cost::{CalculationInput, Calculator};
use crate::fmt::format_duration;
use std::fs;
use std::process::ExitCode;
use tracing::error;

const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Handles `coldcost estimate`.
///
/// A parameter file provides the baseline; flags override it, and the
/// config's default region fills in when neither names one.
#[must_use]
pub fn cmd_estimate(args: &EstimateArgs, config: &Config) -> ExitCode {
    let mut input = match &args.file {
        Some(path) => match load_input(path) {
            Ok(input) => input,
            Err(e) => {
                error!("failed to read parameter file: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => CalculationInput::new(),
    };

    if let Some(ref code) = args.region {
        input.region = Some(resolve_region(code));
    }
    if input.region.is_none() {
        input.region = Some(config.parse_region());
    }
    if let Some(gb) = args.stored {
        input.stored_data = Some(gb);
    }
    if let Some(days) = args.stored_days {
        input.stored_duration = Some(days);
    }
    if let Some(gb) = args.retrieve {
        input.retrieve_data = Some(gb);
    }
    if let Some(hours) = args.window {
        input.retrieval_window = Some(hours);
    }
    if let Some(gb) = args.deleted {
        input.deleted_data = Some(gb);
    }
    if let Some(days) = args.deleted_days {
        input.deleted_duration = Some(days);
    }

    let policy = config.retrieval_policy();
    let calculator = Calculator::new(policy);
    let breakdown = calculator.breakdown(&input);

    if args.json {
        match serde_json::to_string_pretty(&breakdown) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("failed to encode breakdown: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", breakdown.render());
        // The effective window can be longer than requested, so show it.
        if input.retrieve_data.is_some() {
            let hours = policy.effective_window(input.retrieval_window);
            println!(
                "retrieval window: {}",
                format_duration(hours * SECONDS_PER_HOUR)
            );
        }
    }

    ExitCode::SUCCESS
}

fn load_input(path: &str) -> Result<CalculationInput, crate::Error> {
    let content = fs::read_to_string(expand_path(path))?;
    Ok(toml::from_str(&content)?)
}
