use super::SipProjectionPoint;
use crate::calculations::{calculate_sip, SipInput};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, MONTHLY_SAMPLING_LIMIT, QUARTERLY_SAMPLING_LIMIT};
use crate::utils::round_to;

/// Samples the SIP projection for charting.
///
/// Monthly up to 24 months, quarterly up to 60, semiannual beyond. The final
/// month is always included even when the interval does not land on it.
/// Degenerate inputs produce an empty curve.
pub fn calculate_sip_projection(input: &SipInput) -> Vec<SipProjectionPoint> {
    let duration = input.duration_months;
    if duration <= 0 || !input.monthly_investment.is_finite() || input.monthly_investment <= 0.0 {
        return Vec::new();
    }

    let mut points: Vec<SipProjectionPoint> = (0..=duration)
        .step_by(sampling_interval(duration))
        .map(|month| projection_point(input, month))
        .collect();

    if points.last().map(|point| point.month) != Some(duration) {
        points.push(projection_point(input, duration));
    }

    points
}

fn sampling_interval(duration_months: i32) -> usize {
    if duration_months <= MONTHLY_SAMPLING_LIMIT {
        1
    } else if duration_months <= QUARTERLY_SAMPLING_LIMIT {
        3
    } else {
        6
    }
}

fn projection_point(input: &SipInput, month: i32) -> SipProjectionPoint {
    let result = calculate_sip(&SipInput {
        duration_months: month,
        ..*input
    });
    SipProjectionPoint {
        month,
        invested: round_to(result.total_invested, DISPLAY_DECIMAL_PRECISION),
        projected: round_to(result.final_corpus, DISPLAY_DECIMAL_PRECISION),
    }
}
