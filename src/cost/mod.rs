//! The four cost components of an estimate.
//!
//! Each function is pure and total: absent inputs mean "no activity of
//! that kind" and contribute zero, matching the service's billing
//! contract. Nothing here errors, blocks, or holds state between calls.

mod breakdown;
mod input;
mod policy;

pub use breakdown::CostBreakdown;
pub use input::CalculationInput;
pub use policy::RetrievalPolicy;

use crate::rates::{self, TransferTier};

/// Share of stored data the service retrieves for free each month.
const FREE_RETRIEVAL_SHARE: f64 = 0.05;

/// The first transferred GB of each estimate is not billed.
const FREE_TRANSFER_GB: f64 = 1.0;

/// Evaluates the pricing formulas against one input record.
///
/// Holds only the retrieval policy; no state accumulates between calls,
/// so one calculator serves any number of estimates from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    policy: RetrievalPolicy,
}

impl Calculator {
    #[must_use]
    pub const fn new(policy: RetrievalPolicy) -> Self {
        Self { policy }
    }

    /// Monthly storage rate applied over the held duration (30-day months).
    #[must_use]
    pub fn storage_cost(&self, input: &CalculationInput) -> f64 {
        let (Some(data), Some(duration)) = (input.stored_data, input.stored_duration) else {
            return 0.0;
        };
        rates::storage_rate(input.region.unwrap_or_default()) * data
            * (duration / rates::DAYS_PER_MONTH)
    }

    /// Peak-hour retrieval billing.
    ///
    /// The hourly retrieval rate above the free allowance is charged
    /// across the full 720-hour month, not just the retrieval window:
    /// the provider extrapolates peak-hour usage over the month.
    #[must_use]
    pub fn retrieval_cost(&self, input: &CalculationInput) -> f64 {
        let Some(data) = input.retrieve_data else {
            return 0.0;
        };
        let hours = self.policy.effective_window(input.retrieval_window);
        let peak_hourly = data / hours;
        let billable = peak_hourly - self.free_hourly_retrieval(input, hours);
        if billable <= 0.0 {
            // The free allowance covers the whole retrieval.
            return 0.0;
        }
        rates::retrieval_rate(input.region.unwrap_or_default()) * billable * rates::HOURS_PER_MONTH
    }

    /// 5% of stored data per month is free, spread evenly across the
    /// retrieval window, but over at most `free_window_cap_hours` of it.
    fn free_hourly_retrieval(&self, input: &CalculationInput, window_hours: f64) -> f64 {
        let Some(stored) = input.stored_data else {
            return 0.0;
        };
        let spread = window_hours.min(self.policy.free_window_cap_hours);
        stored * FREE_RETRIEVAL_SHARE / (rates::DAYS_PER_MONTH * spread)
    }

    /// Early-deletion penalty against the 90-day retention commitment:
    /// the deletion rate is tripled under 30 days held, doubled under 60,
    /// charged plain under 90, and waived once the commitment is met.
    #[must_use]
    pub fn deletion_cost(&self, input: &CalculationInput) -> f64 {
        let (Some(data), Some(held_days)) = (input.deleted_data, input.deleted_duration) else {
            return 0.0;
        };
        let multiplier = if held_days < 30.0 {
            3.0
        } else if held_days < 60.0 {
            2.0
        } else if held_days < 90.0 {
            1.0
        } else {
            return 0.0;
        };
        data * rates::deletion_rate(input.region.unwrap_or_default()) * multiplier
    }

    /// Greedy partition of the billable amount across ascending volume
    /// tiers: each band fills to its capacity and the remainder rolls
    /// into the next, cheaper band.
    #[must_use]
    pub fn transfer_cost(&self, input: &CalculationInput) -> f64 {
        let Some(data) = input.retrieve_data else {
            return 0.0;
        };
        let region = input.region.unwrap_or_default();
        // Clamped: retrieving less than the free GB must not push a
        // negative amount through the tier cascade.
        let mut remaining = (data - FREE_TRANSFER_GB).max(0.0);
        let mut cost = 0.0;
        for &tier in TransferTier::ALL {
            let portion = match tier.capacity_gb() {
                Some(capacity) => remaining.min(capacity),
                None => remaining,
            };
            cost += rates::transfer_rate(region, tier) * portion;
            remaining -= portion;
        }
        cost
    }

    /// All four components plus their sum; evaluation order is irrelevant.
    #[must_use]
    pub fn breakdown(&self, input: &CalculationInput) -> CostBreakdown {
        CostBreakdown::from_components(
            self.storage_cost(input),
            self.retrieval_cost(input),
            self.deletion_cost(input),
            self.transfer_cost(input),
        )
    }
}
