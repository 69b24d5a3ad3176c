use rust_decimal::Decimal;

use super::Investment;

/// Unit count held by one investment.
///
/// Explicit `units` win. Otherwise units are `amount / price_per_unit`, or zero
/// when the price is missing or non-positive. Never negative.
pub fn investment_units(investment: &Investment) -> Decimal {
    if let Some(units) = investment.units {
        return units.max(Decimal::ZERO);
    }

    match investment.price_per_unit {
        Some(price) if price > Decimal::ZERO => investment
            .amount
            .checked_div(price)
            .unwrap_or(Decimal::MAX)
            .max(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

pub fn total_units<'a, I>(investments: I) -> Decimal
where
    I: IntoIterator<Item = &'a Investment>,
{
    investments
        .into_iter()
        .fold(Decimal::ZERO, |acc, investment| {
            acc.saturating_add(investment_units(investment))
        })
}
