use std::collections::HashMap;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::AssetAllocationPoint;
use crate::assets::{Asset, AssetCategory};
use crate::investments::{investment_units, Investment};
use crate::prices::PriceBook;
use crate::settings::ChartSettings;
use crate::constants::PERCENTAGE_DECIMAL_PRECISION;
use crate::utils::round_money;

/// Current value per asset category, largest first.
///
/// An asset is worth its total units times its latest price. Categories whose
/// value is zero are left out. Percentages carry one decimal and always add up
/// to exactly 100. Colors come from the configured category color, otherwise
/// from the palette by the category's first-appearance position.
pub fn calculate_asset_allocation(
    assets: &[Asset],
    investments: &[Investment],
    prices: &PriceBook,
    settings: &ChartSettings,
) -> Vec<AssetAllocationPoint> {
    let mut units_by_asset: HashMap<&str, Decimal> = HashMap::new();
    for investment in investments {
        let units = units_by_asset
            .entry(investment.asset_id.as_str())
            .or_insert(Decimal::ZERO);
        *units = units.saturating_add(investment_units(investment));
    }

    // Insertion order drives palette assignment
    let mut category_values: Vec<(AssetCategory, Decimal)> = Vec::new();
    for asset in assets {
        let units = units_by_asset
            .get(asset.id.as_str())
            .copied()
            .unwrap_or(Decimal::ZERO);
        let price = prices.latest_price(&asset.id).unwrap_or(Decimal::ZERO);
        let value = units.saturating_mul(price);
        if value <= Decimal::ZERO {
            continue;
        }

        match category_values
            .iter_mut()
            .find(|(category, _)| *category == asset.category)
        {
            Some((_, total)) => *total = total.saturating_add(value),
            None => category_values.push((asset.category, value)),
        }
    }

    let total_value = category_values
        .iter()
        .fold(Decimal::ZERO, |acc, (_, value)| acc.saturating_add(*value));
    if total_value <= Decimal::ZERO {
        return Vec::new();
    }

    let values: Vec<Decimal> = category_values.iter().map(|(_, value)| *value).collect();
    let percentages = apportion_percentages(&values, total_value);

    let mut points: Vec<AssetAllocationPoint> = category_values
        .into_iter()
        .zip(percentages)
        .enumerate()
        .map(|(index, ((category, value), percentage))| AssetAllocationPoint {
            category,
            category_label: category.label().to_string(),
            value: round_money(value),
            percentage,
            color: settings.color_for(category, index),
        })
        .collect();

    points.sort_by(|a, b| b.value.cmp(&a.value));
    points
}

/// Shares of `total` in steps of 0.1, by largest remainder: each share is
/// truncated, then the leftover steps go to the largest truncated remainders
/// (earlier entries win ties). A share can sit one 0.1 step above or below
/// plain 1 dp rounding of the same ratio.
fn apportion_percentages(values: &[Decimal], total: Decimal) -> Vec<Decimal> {
    let steps_per_whole = dec!(100) * Decimal::from(10u32.pow(PERCENTAGE_DECIMAL_PRECISION));

    let exact: Vec<Decimal> = values
        .iter()
        .map(|value| {
            value
                .saturating_mul(steps_per_whole)
                .checked_div(total)
                .unwrap_or(Decimal::ZERO)
        })
        .collect();
    let mut steps: Vec<i64> = exact
        .iter()
        .map(|share| share.floor().to_i64().unwrap_or(0))
        .collect();

    let target = steps_per_whole.to_i64().unwrap_or(0);
    let assigned: i64 = steps.iter().sum();
    let leftover = usize::try_from(target - assigned).unwrap_or(0);

    let mut by_remainder: Vec<usize> = (0..exact.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        let remainder_a = exact[a] - exact[a].floor();
        let remainder_b = exact[b] - exact[b].floor();
        remainder_b.cmp(&remainder_a)
    });
    for &index in by_remainder.iter().take(leftover) {
        steps[index] += 1;
    }

    steps
        .into_iter()
        .map(|step| Decimal::new(step, PERCENTAGE_DECIMAL_PRECISION))
        .collect()
}
