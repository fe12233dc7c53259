//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default region code applied when an estimate omits one.
    pub region: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            region: "us-east".to_string(),
        }
    }
}

/// Retrieval job-window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Minimum job duration in hours; shorter requested windows are stretched to it.
    pub min_job_hours: f64,
    /// The free monthly allowance is spread over at most this many hours of the window.
    pub free_window_cap_hours: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            min_job_hours: 4.0,
            free_window_cap_hours: 24.0,
        }
    }
}
