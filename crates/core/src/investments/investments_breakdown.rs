use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Investment;
use crate::utils::MonthKey;

/// Investments made within one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyInvestments {
    pub month: MonthKey,
    pub total_amount: Decimal,
    pub investments: Vec<Investment>,
}

/// Groups investments by month, newest month first.
///
/// Within a month investments keep chronological order. Only months with
/// activity are listed; this is a ledger view, not a chart series.
pub fn monthly_breakdown(investments: &[Investment]) -> Vec<MonthlyInvestments> {
    let mut by_month: BTreeMap<MonthKey, Vec<Investment>> = BTreeMap::new();
    for investment in investments {
        by_month
            .entry(investment.month())
            .or_default()
            .push(investment.clone());
    }

    by_month
        .into_iter()
        .rev()
        .map(|(month, mut items)| {
            items.sort_by_key(|item| item.investment_date);
            let total_amount = items
                .iter()
                .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.amount));
            MonthlyInvestments {
                month,
                total_amount,
                investments: items,
            }
        })
        .collect()
}
