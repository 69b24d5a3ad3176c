use serde::{Deserialize, Serialize};

use crate::calculations::ReturnMetrics;

/// Return metrics for one grouping together with its annualized return.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    #[serde(flatten)]
    pub metrics: ReturnMetrics,
    /// Annualized rate as a fraction (0.12 = 12%); `None` when undeterminable
    pub xirr: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPerformance {
    pub asset_id: String,
    #[serde(flatten)]
    pub performance: PortfolioMetrics,
}

/// Per-asset performance plus the whole-portfolio total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total: AssetPerformance,
    /// Sorted by asset id
    pub assets: Vec<AssetPerformance>,
}
