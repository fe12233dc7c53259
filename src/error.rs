//! Unified error type for coldcost operations.
//!
//! Only config loading and CLI input handling can fail; the cost
//! functions themselves are total and never error.

use crate::region::ParseRegionError;

/// Error type for coldcost operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error reading a config or parameter file.
    Io(std::io::Error),
    /// TOML parsing error.
    Parse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Unknown region code.
    InvalidRegion(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidRegion(code) => write!(f, "unknown region: '{code}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::ConfigDirNotFound | Self::InvalidRegion(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<ParseRegionError> for Error {
    fn from(e: ParseRegionError) -> Self {
        Self::InvalidRegion(e.input().to_string())
    }
}
