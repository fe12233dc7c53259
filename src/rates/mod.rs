//! Static rate tables: per-region storage, retrieval, and deletion rates,
//! plus the volume-tiered transfer table with its region-dependent curves.

use crate::region::Region;

/// Hours in the 30-day billing month the pricing model assumes throughout.
pub const HOURS_PER_MONTH: f64 = 720.0;

/// Days in the billing month, used to normalize day-based durations.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Volume bands for transfer pricing; rates drop as cumulative volume grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferTier {
    First10Tb,
    Next40Tb,
    Next100Tb,
    Next350Tb,
    /// Unbounded remainder past the 350TB band.
    Max,
}

impl TransferTier {
    /// Capacity of this band in GB; `Max` absorbs everything beyond it.
    #[must_use]
    pub const fn capacity_gb(self) -> Option<f64> {
        match self {
            Self::First10Tb => Some(10_000.0),
            Self::Next40Tb => Some(40_000.0),
            Self::Next100Tb => Some(100_000.0),
            Self::Next350Tb => Some(350_000.0),
            Self::Max => None,
        }
    }

    /// Band names as the service's price sheet spells them.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First10Tb => "10tb",
            Self::Next40Tb => "40tb",
            Self::Next100Tb => "100tb",
            Self::Next350Tb => "350tb",
            Self::Max => "max",
        }
    }

    /// Ascending order, as consumed by the greedy partition in `transfer_cost`.
    pub const ALL: &'static [Self] = &[
        Self::First10Tb,
        Self::Next40Tb,
        Self::Next100Tb,
        Self::Next350Tb,
        Self::Max,
    ];
}

/// Storage rate for the region, per GB-month.
#[must_use]
pub const fn storage_rate(region: Region) -> f64 {
    match region {
        Region::UsEast | Region::UsWest1 => 0.01,
        Region::UsWest2 | Region::Europe => 0.011,
        Region::Asia => 0.012,
    }
}

/// Retrieval rate for the region, per GB of billable peak-hour data.
#[must_use]
pub const fn retrieval_rate(region: Region) -> f64 {
    match region {
        Region::UsEast | Region::UsWest1 => 0.01,
        Region::UsWest2 | Region::Europe => 0.011,
        Region::Asia => 0.012,
    }
}

/// Deletion rate for the region, per GB deleted ahead of the retention commitment.
#[must_use]
pub const fn deletion_rate(region: Region) -> f64 {
    match region {
        Region::UsEast | Region::UsWest1 => 0.01,
        Region::UsWest2 | Region::Europe => 0.011,
        Region::Asia => 0.012,
    }
}

/// Transfer rate per GB for the region and volume band.
///
/// Asia has its own, higher curve; every other region shares one.
#[must_use]
pub const fn transfer_rate(region: Region, tier: TransferTier) -> f64 {
    match region {
        Region::Asia => match tier {
            TransferTier::First10Tb => 0.201,
            TransferTier::Next40Tb => 0.158,
            TransferTier::Next100Tb => 0.137,
            TransferTier::Next350Tb | TransferTier::Max => 0.127,
        },
        _ => match tier {
            TransferTier::First10Tb => 0.12,
            TransferTier::Next40Tb => 0.09,
            TransferTier::Next100Tb => 0.07,
            TransferTier::Next350Tb | TransferTier::Max => 0.05,
        },
    }
}
