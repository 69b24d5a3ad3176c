//! Calculation core: return aggregation, XIRR and SIP projection.

pub mod returns;
pub mod sip;
pub mod xirr;

pub use returns::{aggregate_return_metrics, calculate_return_metrics, percentage_of, ReturnMetrics};
pub use sip::{calculate_sip, SipInput, SipResult};
pub use xirr::{calculate_xirr, calculate_xirr_with, CashFlow};
