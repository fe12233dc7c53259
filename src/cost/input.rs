//! Separated from the calculator so callers can assemble parameters
//! without touching the rate tables.

use crate::region::Region;
use serde::Deserialize;

/// Every field defaults to absent: a cost component whose inputs are
/// missing contributes zero instead of failing. Absence is distinct from
/// zero, since storing 0 GB is an estimate and not-saying is the lack of one.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct CalculationInput {
    /// Selects the rate tables; absent means the default low-cost tier.
    pub region: Option<Region>,
    /// GB currently stored.
    pub stored_data: Option<f64>,
    /// Days the stored data has been held.
    pub stored_duration: Option<f64>,
    /// GB to retrieve.
    pub retrieve_data: Option<f64>,
    /// Requested retrieval window in hours; the service stretches windows
    /// below its minimum job duration.
    pub retrieval_window: Option<f64>,
    /// GB being deleted ahead of the retention commitment.
    pub deleted_data: Option<f64>,
    /// Days the deleted data was held before deletion.
    pub deleted_duration: Option<f64>,
}

impl CalculationInput {
    /// Starts empty; nothing is billed until a field is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the rate tables for every component at once.
    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// GB currently stored; also feeds the retrieval free allowance.
    #[must_use]
    pub const fn stored_data(mut self, gb: f64) -> Self {
        self.stored_data = Some(gb);
        self
    }

    /// Days held; storage is billed in 30-day months.
    #[must_use]
    pub const fn stored_duration(mut self, days: f64) -> Self {
        self.stored_duration = Some(days);
        self
    }

    /// GB to retrieve; drives both retrieval and transfer cost.
    #[must_use]
    pub const fn retrieve_data(mut self, gb: f64) -> Self {
        self.retrieve_data = Some(gb);
        self
    }

    /// Requested retrieval window in hours.
    #[must_use]
    pub const fn retrieval_window(mut self, hours: f64) -> Self {
        self.retrieval_window = Some(hours);
        self
    }

    /// GB deleted before the retention commitment is up.
    #[must_use]
    pub const fn deleted_data(mut self, gb: f64) -> Self {
        self.deleted_data = Some(gb);
        self
    }

    /// Days the deleted data was held; determines the penalty band.
    #[must_use]
    pub const fn deleted_duration(mut self, days: f64) -> Self {
        self.deleted_duration = Some(days);
        self
    }
}
