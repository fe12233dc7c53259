//! Command implementations.

mod estimate;
mod rates;
mod regions;

pub use estimate::cmd_estimate;
pub use rates::cmd_rates;
pub use regions::cmd_regions;
