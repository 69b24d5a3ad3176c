//! Invested / valuation / return totals for a grouping of investments.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::investments::{total_units, Investment};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnMetrics {
    pub total_invested: Decimal,
    pub total_units: Decimal,
    /// Zero when no valuation exists
    pub current_value: Decimal,
    pub absolute_return: Decimal,
    /// `None` means the return is unknown, which is not the same as 0%.
    pub return_percentage: Option<Decimal>,
}

impl ReturnMetrics {
    /// True when a current value could be computed for this grouping.
    pub fn has_valuation(&self) -> bool {
        self.current_value > Decimal::ZERO
    }

    fn is_empty(&self) -> bool {
        self.total_invested.is_zero() && self.total_units.is_zero()
    }

    fn with_valuation(total_invested: Decimal, total_units: Decimal, current_value: Decimal) -> Self {
        let absolute_return = current_value.saturating_sub(total_invested);
        Self {
            total_invested,
            total_units,
            current_value,
            absolute_return,
            return_percentage: percentage_of(absolute_return, total_invested),
        }
    }

    fn without_valuation(total_invested: Decimal, total_units: Decimal) -> Self {
        Self {
            total_invested,
            total_units,
            ..Self::default()
        }
    }
}

/// `part / whole * 100`, or `None` when `whole` is not positive.
pub fn percentage_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole <= Decimal::ZERO {
        return None;
    }
    part.checked_div(whole)
        .map(|ratio| ratio.saturating_mul(dec!(100)))
}

/// Aggregates one grouping of investments valued at `latest_price`.
///
/// A valuation exists only when the price is positive and the grouping holds
/// units. Without one, value and return are zero and the percentage is `None`.
pub fn calculate_return_metrics(
    investments: &[Investment],
    latest_price: Option<Decimal>,
) -> ReturnMetrics {
    let total_invested = investments
        .iter()
        .fold(Decimal::ZERO, |acc, investment| {
            acc.saturating_add(investment.amount)
        });
    let total_units = total_units(investments);

    match latest_price {
        Some(price) if price > Decimal::ZERO && total_units > Decimal::ZERO => {
            ReturnMetrics::with_valuation(
                total_invested,
                total_units,
                total_units.saturating_mul(price),
            )
        }
        _ => ReturnMetrics::without_valuation(total_invested, total_units),
    }
}

/// Combines per-asset metrics into a portfolio total.
///
/// Invested amounts and units are summed. The total is valued only if every
/// non-empty grouping has a valuation; one unpriced holding makes the whole
/// portfolio value unknown.
pub fn aggregate_return_metrics(groups: &[ReturnMetrics]) -> ReturnMetrics {
    let total_invested = groups
        .iter()
        .fold(Decimal::ZERO, |acc, m| acc.saturating_add(m.total_invested));
    let total_units = groups
        .iter()
        .fold(Decimal::ZERO, |acc, m| acc.saturating_add(m.total_units));

    let mut non_empty = groups.iter().filter(|m| !m.is_empty()).peekable();
    if non_empty.peek().is_none() {
        return ReturnMetrics::without_valuation(total_invested, total_units);
    }

    let mut current_value = Decimal::ZERO;
    for metrics in non_empty {
        if !metrics.has_valuation() {
            return ReturnMetrics::without_valuation(total_invested, total_units);
        }
        current_value = current_value.saturating_add(metrics.current_value);
    }

    ReturnMetrics::with_valuation(total_invested, total_units, current_value)
}
