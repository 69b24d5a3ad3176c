//! Chart series derived from raw investments and prices.
//!
//! Every function is a pure transform; results are recomputed from the raw
//! records on each call. The monthly series share one bucketing rule: every
//! calendar month in range appears exactly once, in order, including months
//! without activity.

mod allocation;
mod charts_model;
mod contributions;
mod growth;
mod projection;
mod time_range;


pub use allocation::calculate_asset_allocation;
pub use charts_model::*;
pub use contributions::calculate_sip_contributions;
pub use growth::calculate_portfolio_growth;
pub use projection::calculate_sip_projection;
pub use time_range::{filter_by_time_range, TimeRange};
