//! Portfolio-level views: chart series and performance summaries.

pub mod charts;
pub mod performance;

pub use charts::*;
pub use performance::*;
