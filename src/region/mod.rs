//! Region codes that select which rate tables apply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The service's fixed region set. The default variant doubles as the
/// fallback tier for absent or unknown regions, so rate lookups stay total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    /// Lowest-cost tier, also the fallback when no region is given.
    #[default]
    #[serde(rename = "us-east")]
    UsEast,
    #[serde(rename = "us-west-1")]
    UsWest1,
    #[serde(rename = "us-west-2")]
    UsWest2,
    #[serde(rename = "europe")]
    Europe,
    /// Carries its own, higher transfer-rate curve.
    #[serde(rename = "asia")]
    Asia,
}

impl Region {
    /// Lowercase because config files and CLI args use the wire-format codes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UsEast => "us-east",
            Self::UsWest1 => "us-west-1",
            Self::UsWest2 => "us-west-2",
            Self::Europe => "europe",
            Self::Asia => "asia",
        }
    }

    /// Convenience for iteration, used by the `regions` command and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::UsEast,
            Self::UsWest1,
            Self::UsWest2,
            Self::Europe,
            Self::Asia,
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown region" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRegionError(String);

impl ParseRegionError {
    /// The offending input, for fallback logging.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown region: '{}'", self.0)
    }
}

impl std::error::Error for ParseRegionError {}

impl FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "us-east" => Ok(Self::UsEast),
            "us-west-1" => Ok(Self::UsWest1),
            "us-west-2" => Ok(Self::UsWest2),
            "europe" | "eu" => Ok(Self::Europe),
            "asia" => Ok(Self::Asia),
            _ => Err(ParseRegionError(s.to_string())),
        }
    }
}
