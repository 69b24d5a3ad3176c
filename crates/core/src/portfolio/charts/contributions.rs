use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::SipContributionPoint;
use crate::investments::Investment;
use crate::utils::{months_between, MonthKey};

/// Sums SIP contributions per month from the first SIP month through `as_of`
/// (or the last SIP month, if later).
///
/// Months without a SIP contribution are kept with zero amount and count so a
/// missed installment shows up as a gap instead of disappearing.
pub fn calculate_sip_contributions(
    investments: &[Investment],
    as_of: MonthKey,
) -> Vec<SipContributionPoint> {
    let mut monthly: BTreeMap<MonthKey, (Decimal, u32)> = BTreeMap::new();
    for investment in investments.iter().filter(|inv| inv.is_sip()) {
        let (amount, count) = monthly
            .entry(investment.month())
            .or_insert((Decimal::ZERO, 0));
        *amount = amount.saturating_add(investment.amount);
        *count += 1;
    }

    let (Some(first), Some(last)) = (
        monthly.keys().next().copied(),
        monthly.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    months_between(first, last.max(as_of))
        .map(|month| {
            let (amount, count) = monthly
                .get(&month)
                .copied()
                .unwrap_or((Decimal::ZERO, 0));
            SipContributionPoint {
                month,
                amount,
                count,
            }
        })
        .collect()
}
