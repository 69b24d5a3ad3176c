//! Prices module - price points and per-asset price lookups.

mod prices_model;

pub use prices_model::{PriceBook, PricePoint};
