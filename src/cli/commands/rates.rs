//! Rates command implementation.

use crate::rates::{TransferTier, deletion_rate, retrieval_rate, storage_rate, transfer_rate};
use crate::region::Region;
use std::process::ExitCode;
use tracing::error;

/// Handles `coldcost rates [--region <code>]`.
///
/// Unlike `estimate`, an unknown region here is an error: the user asked
/// to inspect a specific table, so silently showing the default one would
/// mislead.
#[must_use]
pub fn cmd_rates(region: Option<&str>) -> ExitCode {
    let regions: Vec<Region> = match region {
        Some(code) => match code.parse() {
            Ok(region) => vec![region],
            Err(e) => {
                error!("{}", crate::Error::from(e));
                return ExitCode::FAILURE;
            }
        },
        None => Region::all().to_vec(),
    };

    for region in regions {
        println!("{region}");
        println!("  storage    {:.3}/GB-month", storage_rate(region));
        println!("  retrieval  {:.3}/GB", retrieval_rate(region));
        println!("  deletion   {:.3}/GB", deletion_rate(region));
        print!("  transfer  ");
        for &tier in TransferTier::ALL {
            print!(" {}={:.3}", tier.as_str(), transfer_rate(region, tier));
        }
        println!();
    }

    ExitCode::SUCCESS
}
