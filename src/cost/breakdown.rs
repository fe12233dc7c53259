//! Output record for a single estimate. The CLI renders it, the library
//! just hands it back.

use crate::fmt::format_money;
use serde::Serialize;

/// Four independent cost components and their sum. `total` is always the
/// literal sum of the other four fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Monthly storage rate applied over the held duration.
    pub storage: f64,
    /// Peak-hour retrieval billing above the free allowance.
    pub retrieval: f64,
    /// Early-deletion penalty.
    pub deletion: f64,
    /// Volume-tiered transfer-out charge.
    pub transfer: f64,
    /// Sum of the four components.
    pub total: f64,
}

impl CostBreakdown {
    /// Deriving the sum here keeps the total/components invariant in one place.
    #[must_use]
    pub fn from_components(storage: f64, retrieval: f64, deletion: f64, transfer: f64) -> Self {
        Self {
            storage,
            retrieval,
            deletion,
            transfer,
            total: storage + retrieval + deletion + transfer,
        }
    }

    /// Aligned plain-text table for terminal output.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (label, amount) in [
            ("storage", self.storage),
            ("retrieval", self.retrieval),
            ("deletion", self.deletion),
            ("transfer", self.transfer),
            ("total", self.total),
        ] {
            out.push_str(&format!("{label:<10} {}\n", format_money(amount)));
        }
        out
    }
}
