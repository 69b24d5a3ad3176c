use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::{AssetPerformance, PortfolioMetrics, PortfolioSummary};
use crate::calculations::{
    aggregate_return_metrics, calculate_return_metrics, calculate_xirr_with, CashFlow,
};
use crate::constants::PORTFOLIO_TOTAL_ID;
use crate::investments::Investment;
use crate::prices::PriceBook;
use crate::settings::XirrSettings;

/// Layers an annualized return on top of the plain return metrics.
#[derive(Debug, Clone, Default)]
pub struct PerformanceCalculator {
    xirr_settings: XirrSettings,
}

impl PerformanceCalculator {
    pub fn new(xirr_settings: XirrSettings) -> Self {
        Self { xirr_settings }
    }

    /// Metrics and XIRR for one grouping valued at `latest_price`.
    ///
    /// Each investment becomes a negative flow on its date. When the grouping
    /// has a current value, that value is added as a positive flow at `now`.
    pub fn calculate_metrics(
        &self,
        investments: &[Investment],
        latest_price: Option<Decimal>,
        now: DateTime<Utc>,
    ) -> PortfolioMetrics {
        let metrics = calculate_return_metrics(investments, latest_price);
        let cash_flows = build_cash_flows(investments, metrics.current_value, now);
        let xirr = calculate_xirr_with(&cash_flows, &self.xirr_settings);
        PortfolioMetrics { metrics, xirr }
    }

    /// Performance per asset (each at its latest price) and for the whole
    /// portfolio.
    ///
    /// The total is valued only when every asset holding units is valued. Its
    /// XIRR runs over all investments plus the total value at `now`.
    pub fn summarize(
        &self,
        investments: &[Investment],
        prices: &PriceBook,
        now: DateTime<Utc>,
    ) -> PortfolioSummary {
        let mut by_asset: BTreeMap<&str, Vec<Investment>> = BTreeMap::new();
        for investment in investments {
            by_asset
                .entry(investment.asset_id.as_str())
                .or_default()
                .push(investment.clone());
        }

        let assets: Vec<AssetPerformance> = by_asset
            .into_iter()
            .map(|(asset_id, grouping)| AssetPerformance {
                asset_id: asset_id.to_string(),
                performance: self.calculate_metrics(
                    &grouping,
                    prices.latest_price(asset_id),
                    now,
                ),
            })
            .collect();

        let per_asset: Vec<_> = assets
            .iter()
            .map(|asset| asset.performance.metrics.clone())
            .collect();
        let metrics = aggregate_return_metrics(&per_asset);
        let cash_flows = build_cash_flows(investments, metrics.current_value, now);
        let xirr = calculate_xirr_with(&cash_flows, &self.xirr_settings);

        debug!(
            "Summarized {} assets: invested {}, value {}, xirr {:?}",
            assets.len(),
            metrics.total_invested,
            metrics.current_value,
            xirr
        );

        PortfolioSummary {
            total: AssetPerformance {
                asset_id: PORTFOLIO_TOTAL_ID.to_string(),
                performance: PortfolioMetrics { metrics, xirr },
            },
            assets,
        }
    }
}

/// Solver input for a grouping: contributions as outflows in date order, then
/// the current value (if any) as an inflow at `now`.
pub fn build_cash_flows(
    investments: &[Investment],
    current_value: Decimal,
    now: DateTime<Utc>,
) -> Vec<CashFlow> {
    let mut dated: Vec<&Investment> = investments.iter().collect();
    dated.sort_by_key(|investment| investment.investment_date);

    let mut flows: Vec<CashFlow> = dated
        .into_iter()
        .filter_map(|investment| {
            (-investment.amount)
                .to_f64()
                .map(|amount| CashFlow::on_date(amount, investment.investment_date))
        })
        .collect();

    if current_value > Decimal::ZERO {
        if let Some(amount) = current_value.to_f64() {
            flows.push(CashFlow::new(amount, now));
        }
    }

    flows
}
