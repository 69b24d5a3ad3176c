//! Investments module - records, unit derivation and monthly grouping.

mod investments_breakdown;
mod investments_model;
mod investments_units;


pub use investments_breakdown::{monthly_breakdown, MonthlyInvestments};
pub use investments_model::{Investment, InvestmentType};
pub use investments_units::{investment_units, total_units};
