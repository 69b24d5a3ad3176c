//! Future value of a fixed monthly contribution (SIP).

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SAFE_VALUE, MONTHS_PER_YEAR};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipInput {
    pub monthly_investment: f64,
    pub duration_months: i32,
    /// Decimal fraction, e.g. 0.12 for 12% a year
    pub expected_annual_return: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipResult {
    pub total_invested: f64,
    pub estimated_returns: f64,
    pub final_corpus: f64,
}

/// Projects a SIP with the annuity-due formula
/// `P · ((1 + i)^n − 1) / i · (1 + i)` at monthly rate `i = annual / 12`.
///
/// Degenerate inputs (no duration or no positive contribution) yield an
/// all-zero result. A corpus whose magnitude overflows is clamped to
/// [`MAX_SAFE_VALUE`] with its sign kept, so every field stays finite.
pub fn calculate_sip(input: &SipInput) -> SipResult {
    let SipInput {
        monthly_investment,
        duration_months,
        expected_annual_return,
    } = *input;

    if duration_months <= 0 || !monthly_investment.is_finite() || monthly_investment <= 0.0 {
        return SipResult::default();
    }

    let monthly_rate = expected_annual_return / f64::from(MONTHS_PER_YEAR);
    let total_invested = monthly_investment * f64::from(duration_months);

    let final_corpus = if monthly_rate == 0.0 {
        total_invested
    } else {
        monthly_investment * ((1.0 + monthly_rate).powi(duration_months) - 1.0) / monthly_rate
            * (1.0 + monthly_rate)
    };

    if !final_corpus.is_finite() || final_corpus.abs() > MAX_SAFE_VALUE || !total_invested.is_finite()
    {
        warn!(
            "SIP projection overflowed (monthly {}, {} months, annual return {}); clamping to {}",
            monthly_investment, duration_months, expected_annual_return, MAX_SAFE_VALUE
        );
        let total_invested = if total_invested.is_finite() {
            total_invested.min(MAX_SAFE_VALUE)
        } else {
            MAX_SAFE_VALUE
        };
        let final_corpus = if final_corpus.is_nan() {
            MAX_SAFE_VALUE
        } else {
            MAX_SAFE_VALUE.copysign(final_corpus)
        };
        return SipResult {
            total_invested,
            estimated_returns: final_corpus - total_invested,
            final_corpus,
        };
    }

    SipResult {
        total_invested,
        estimated_returns: final_corpus - total_invested,
        final_corpus,
    }
}
