//! Annualized return (XIRR) for irregularly timed cash flows.
//!
//! Newton-Raphson on
//!
//! ```text
//! NPV(r)  = Σ amountᵢ / (1 + r)^yearsᵢ
//! NPV'(r) = Σ -(yearsᵢ · amountᵢ) / (1 + r)^(yearsᵢ + 1)
//! ```
//!
//! where `yearsᵢ` is the millisecond distance from the first flow divided by a
//! fixed 365-day year. The solver either converges or reports `None`; it never
//! hands back an unconverged guess.

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{DAYS_PER_YEAR, MILLIS_PER_DAY};
use crate::settings::XirrSettings;
use crate::utils::start_of_day_utc;

/// A signed cash flow: negative for money put in, positive for money taken out
/// (or the current value of what is still held).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub amount: f64,
    pub date: DateTime<Utc>,
}

impl CashFlow {
    pub fn new(amount: f64, date: DateTime<Utc>) -> Self {
        Self { amount, date }
    }

    /// Flow dated at midnight UTC of `date`.
    pub fn on_date(amount: f64, date: NaiveDate) -> Self {
        Self::new(amount, start_of_day_utc(date))
    }
}

/// Solves XIRR with the default solver settings.
pub fn calculate_xirr(cash_flows: &[CashFlow]) -> Option<f64> {
    calculate_xirr_with(cash_flows, &XirrSettings::default())
}

/// Solves XIRR for flows in chronological order; the first flow is t = 0.
///
/// Returns `None` without iterating when there are fewer than two flows or the
/// flows do not include both a positive and a negative amount. Also returns
/// `None` when the derivative vanishes, the iteration leaves the domain
/// (non-finite values or a rate at or below -100%), or the iteration budget
/// runs out.
pub fn calculate_xirr_with(cash_flows: &[CashFlow], settings: &XirrSettings) -> Option<f64> {
    if cash_flows.len() < 2 {
        return None;
    }

    let has_positive = cash_flows.iter().any(|flow| flow.amount > 0.0);
    let has_negative = cash_flows.iter().any(|flow| flow.amount < 0.0);
    if !has_positive || !has_negative {
        return None;
    }

    let start = cash_flows[0].date;
    let periods: Vec<(f64, f64)> = cash_flows
        .iter()
        .map(|flow| (flow.amount, years_between(start, flow.date)))
        .collect();

    let mut rate = settings.guess;
    for iteration in 0..settings.max_iterations {
        let value = npv(&periods, rate);
        if !value.is_finite() {
            debug!("XIRR: NPV not finite at rate {} (iteration {})", rate, iteration);
            return None;
        }
        if value.abs() < settings.tolerance {
            return Some(rate);
        }

        let derivative = npv_derivative(&periods, rate);
        if derivative == 0.0 || !derivative.is_finite() {
            debug!("XIRR: derivative vanished at rate {} (iteration {})", rate, iteration);
            return None;
        }

        rate -= value / derivative;
        if !rate.is_finite() || rate <= -1.0 {
            debug!("XIRR: rate left the solvable domain ({}) at iteration {}", rate, iteration);
            return None;
        }
    }

    debug!(
        "XIRR: no convergence within {} iterations (last rate {})",
        settings.max_iterations, rate
    );
    None
}

fn years_between(start: DateTime<Utc>, date: DateTime<Utc>) -> f64 {
    (date - start).num_milliseconds() as f64 / (DAYS_PER_YEAR * MILLIS_PER_DAY)
}

fn npv(periods: &[(f64, f64)], rate: f64) -> f64 {
    periods
        .iter()
        .map(|(amount, years)| amount / (1.0 + rate).powf(*years))
        .sum()
}

fn npv_derivative(periods: &[(f64, f64)], rate: f64) -> f64 {
    periods
        .iter()
        .map(|(amount, years)| -(years * amount) / (1.0 + rate).powf(years + 1.0))
        .sum()
}
