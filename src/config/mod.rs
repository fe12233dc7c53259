//! TOML configuration loading.
//!
//! Separated from struct definitions so the loading logic (path
//! resolution, file I/O) stays independent of the serde schema.

mod structs;

pub use structs::{GeneralConfig, RetrievalConfig};

use crate::cost::RetrievalPolicy;
use crate::region::Region;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A completely missing config file must still produce a working
/// calculator; `#[serde(default)]` on every field keeps zero-config
/// estimates working out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default region for estimates that don't name one.
    pub general: GeneralConfig,
    /// Job-window values handed to the calculator as a `RetrievalPolicy`.
    pub retrieval: RetrievalConfig,
}

impl Config {
    /// Loads `coldcost.toml` from the platform config directory; a
    /// missing file yields the defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing
    /// hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        debug!("loading config from default location");
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path instead of the default
    /// location. Useful for tests and the `--config` flag.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            debug!("config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Platform config path, e.g. `~/.config/coldcost/coldcost.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("coldcost").join("coldcost.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores the region as a string for TOML ergonomics. This
    /// converts to the typed enum, falling back to the default tier on an
    /// unknown code.
    #[must_use]
    pub fn parse_region(&self) -> Region {
        self.general.region.parse().unwrap_or_else(|_| {
            warn!(
                region = %self.general.region,
                "unknown region in config, using default rates"
            );
            Region::default()
        })
    }

    /// The typed policy record the calculator consumes.
    #[must_use]
    pub fn retrieval_policy(&self) -> RetrievalPolicy {
        RetrievalPolicy::new()
            .min_job_hours(self.retrieval.min_job_hours)
            .free_window_cap_hours(self.retrieval.free_window_cap_hours)
    }
}
