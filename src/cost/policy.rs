//! Job-window parameters for retrieval billing, passed explicitly to the
//! calculator; no process-wide settings are involved.

/// The service's retrieval-job constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrievalPolicy {
    /// The service refuses retrieval jobs shorter than this many hours;
    /// shorter requested windows are stretched to it.
    pub min_job_hours: f64,
    /// The free monthly allowance is spread over at most this many hours
    /// of the window, even when the job itself runs longer.
    pub free_window_cap_hours: f64,
}

impl Default for RetrievalPolicy {
    fn default() -> Self {
        Self {
            min_job_hours: 4.0,
            free_window_cap_hours: 24.0,
        }
    }
}

impl RetrievalPolicy {
    /// The service defaults: 4-hour minimum job, 24-hour free-allowance spread.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum job duration in hours.
    #[must_use]
    pub const fn min_job_hours(mut self, hours: f64) -> Self {
        self.min_job_hours = hours;
        self
    }

    /// Cap on the hours the free allowance is spread over.
    #[must_use]
    pub const fn free_window_cap_hours(mut self, hours: f64) -> Self {
        self.free_window_cap_hours = hours;
        self
    }

    /// The window the job actually runs: the requested hours, floored at
    /// the service minimum. An absent request means the minimum job.
    #[must_use]
    pub fn effective_window(&self, requested: Option<f64>) -> f64 {
        requested.map_or(self.min_job_hours, |hours| hours.max(self.min_job_hours))
    }
}
