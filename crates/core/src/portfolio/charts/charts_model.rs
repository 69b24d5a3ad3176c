//! View models for chart series. Plain records, serialized in camelCase.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetCategory;
use crate::utils::MonthKey;

/// Cumulative invested amount against estimated value at the end of a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioGrowthPoint {
    pub month: MonthKey,
    pub invested: Decimal,
    pub value: Decimal,
    pub gain_loss: Decimal,
}

/// SIP money put in during a month. Zero amount and count mark a missed month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipContributionPoint {
    pub month: MonthKey,
    pub amount: Decimal,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocationPoint {
    pub category: AssetCategory,
    pub category_label: String,
    pub value: Decimal,
    /// Share of the total value, 0-100, one decimal
    pub percentage: Decimal,
    pub color: String,
}

/// One sample of the SIP projection curve; `month` counts from the start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipProjectionPoint {
    pub month: i32,
    pub invested: f64,
    pub projected: f64,
}

/// Series bucketed by calendar month.
pub trait MonthlyPoint {
    fn month(&self) -> MonthKey;
}

impl MonthlyPoint for PortfolioGrowthPoint {
    fn month(&self) -> MonthKey {
        self.month
    }
}

impl MonthlyPoint for SipContributionPoint {
    fn month(&self) -> MonthKey {
        self.month
    }
}
