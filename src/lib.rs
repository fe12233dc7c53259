#![forbid(unsafe_code)]

//! `coldcost` - Cost estimator for tiered cloud cold storage.
//!
//! Pure pricing arithmetic for an archival storage service:
//! - Per-region rate tables with volume-tiered transfer pricing
//! - Four independent cost components (storage, retrieval, deletion, transfer)
//! - Peak-hour retrieval billing with a monthly free allowance
//! - Early-deletion penalties against a 90-day retention commitment
//!
//! # Example
//!
//! ```
//! use coldcost::{CalculationInput, Calculator, Region};
//!
//! let input = CalculationInput::new()
//!     .region(Region::Europe)
//!     .stored_data(300.0)
//!     .stored_duration(30.0)
//!     .retrieve_data(50.0);
//!
//! let calculator = Calculator::default();
//! let costs = calculator.breakdown(&input);
//! assert!(costs.total >= costs.storage);
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the command-line interface

// Core modules (always available)
pub mod config;
pub mod cost;
pub mod error;
pub mod fmt;
pub mod rates;
pub mod region;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use cost::{CalculationInput, Calculator, CostBreakdown, RetrievalPolicy};
pub use error::Error;
pub use fmt::{format_duration, format_money};
pub use rates::{TransferTier, deletion_rate, retrieval_rate, storage_rate, transfer_rate};
pub use region::Region;
