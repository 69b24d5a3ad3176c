use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use super::PortfolioGrowthPoint;
use crate::investments::{investment_units, Investment};
use crate::prices::PriceBook;
use crate::utils::{months_between, round_money, MonthKey};

#[derive(Default)]
struct MonthlyActivity<'a> {
    invested: Decimal,
    units_by_asset: BTreeMap<&'a str, Decimal>,
}

/// Builds the month-by-month growth series from the first investment through
/// `as_of` (or the last investment month, if later), gaps included.
///
/// Each asset's cumulative units are valued at the price recorded in or before
/// that month, else at the asset's latest price. If that leaves the whole
/// month valued at zero while money has been invested, the invested amount is
/// shown as the value. That fallback is an approximation for early months
/// without price data, not a valuation.
pub fn calculate_portfolio_growth(
    investments: &[Investment],
    prices: &PriceBook,
    as_of: MonthKey,
) -> Vec<PortfolioGrowthPoint> {
    let mut monthly: BTreeMap<MonthKey, MonthlyActivity> = BTreeMap::new();
    for investment in investments {
        let activity = monthly.entry(investment.month()).or_default();
        activity.invested = activity.invested.saturating_add(investment.amount);
        let units = activity
            .units_by_asset
            .entry(investment.asset_id.as_str())
            .or_insert(Decimal::ZERO);
        *units = units.saturating_add(investment_units(investment));
    }

    let (Some(first), Some(last)) = (
        monthly.keys().next().copied(),
        monthly.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    let mut cumulative_invested = Decimal::ZERO;
    let mut cumulative_units: BTreeMap<&str, Decimal> = BTreeMap::new();
    let mut points = Vec::new();

    for month in months_between(first, last.max(as_of)) {
        if let Some(activity) = monthly.get(&month) {
            cumulative_invested = cumulative_invested.saturating_add(activity.invested);
            for (asset_id, units) in &activity.units_by_asset {
                let held = cumulative_units.entry(*asset_id).or_insert(Decimal::ZERO);
                *held = held.saturating_add(*units);
            }
        }

        let mut value = cumulative_units
            .iter()
            .fold(Decimal::ZERO, |acc, (asset_id, units)| {
                let price = prices
                    .price_for_month(asset_id, month)
                    .unwrap_or(Decimal::ZERO);
                acc.saturating_add(units.saturating_mul(price))
            });

        if value.is_zero() && cumulative_invested > Decimal::ZERO {
            debug!(
                "No price data to value {}; using invested amount {} as value",
                month, cumulative_invested
            );
            value = cumulative_invested;
        }

        points.push(PortfolioGrowthPoint {
            month,
            invested: round_money(cumulative_invested),
            value: round_money(value),
            gain_loss: round_money(value.saturating_sub(cumulative_invested)),
        });
    }

    points
}
