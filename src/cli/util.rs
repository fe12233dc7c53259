//! Utility functions for the CLI.

use crate::region::Region;
use std::path::PathBuf;
use tracing::warn;

/// Expands a leading tilde to the user's home directory.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Parses a region flag, falling back to the default tier on an unknown
/// code: the service prices unknown regions at the default rates rather
/// than refusing the estimate.
#[must_use]
pub fn resolve_region(code: &str) -> Region {
    code.parse().unwrap_or_else(|_| {
        warn!(region = %code, "unknown region, using default rates");
        Region::default()
    })
}
