use serde::{Deserialize, Serialize};

use super::MonthlyPoint;
use crate::utils::MonthKey;

/// Window applied to monthly chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[default]
    #[serde(rename = "ALL")]
    All,
}

impl TimeRange {
    /// First month kept by this range, relative to `as_of`. `None` keeps everything.
    pub fn cutoff(&self, as_of: MonthKey) -> Option<MonthKey> {
        match self {
            TimeRange::SixMonths => Some(as_of.minus_months(6)),
            TimeRange::OneYear => Some(as_of.minus_months(12)),
            TimeRange::All => None,
        }
    }
}

pub fn filter_by_time_range<T>(points: &[T], range: TimeRange, as_of: MonthKey) -> Vec<T>
where
    T: MonthlyPoint + Clone,
{
    match range.cutoff(as_of) {
        Some(cutoff) => points
            .iter()
            .filter(|point| point.month() >= cutoff)
            .cloned()
            .collect(),
        None => points.to_vec(),
    }
}
