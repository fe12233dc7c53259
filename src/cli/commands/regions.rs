//! Regions command implementation.

use crate::region::Region;
use std::process::ExitCode;

/// Handles `coldcost regions`.
#[must_use]
pub fn cmd_regions() -> ExitCode {
    for region in Region::all() {
        println!("{region}");
    }
    ExitCode::SUCCESS
}
