//! Sipfolio Core - calculation core for a personal investment tracker.
//!
//! Pure, synchronous transforms from raw investment, asset and price records
//! into return metrics, annualized returns, SIP projections and chart series.
//! Storage and presentation live outside this crate; every function takes
//! fully materialized inputs and returns plain serializable view models.

pub mod assets;
pub mod calculations;
pub mod constants;
pub mod errors;
pub mod investments;
pub mod portfolio;
pub mod prices;
pub mod settings;
pub mod utils;

pub use assets::*;
pub use calculations::*;
pub use investments::*;
pub use portfolio::*;
pub use prices::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
