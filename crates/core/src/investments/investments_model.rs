//! Investment domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::utils::MonthKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentType {
    /// Recurring systematic investment plan contribution
    Sip,
    LumpSum,
}

impl InvestmentType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            InvestmentType::Sip => "sip",
            InvestmentType::LumpSum => "lump_sum",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            InvestmentType::Sip => "SIP",
            InvestmentType::LumpSum => "Lump Sum",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sip" => Ok(InvestmentType::Sip),
            "lump_sum" => Ok(InvestmentType::LumpSum),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown investment type '{}'",
                other
            )))),
        }
    }
}

/// A single contribution into an asset, as stored by the persistence layer.
///
/// `units` and `price_per_unit` are optional; see
/// [`investment_units`](crate::investments::investment_units) for how a unit
/// count is derived when `units` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: String,
    pub asset_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub units: Option<Decimal>,
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
    pub investment_date: NaiveDate,
    pub investment_type: InvestmentType,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Investment {
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.investment_date)
    }

    pub fn is_sip(&self) -> bool {
        self.investment_type == InvestmentType::Sip
    }

    /// Checks the record against the input contract.
    ///
    /// The calculation functions do not call this; they stay total over any
    /// numbers they are handed. It is meant for the form/persistence layer.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if self.asset_id.trim().is_empty() {
            return Err(ValidationError::MissingField("asset_id".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Investment {} amount must be positive, got {}",
                self.id, self.amount
            ))
            .into());
        }
        if let Some(units) = self.units {
            if units < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "Investment {} units cannot be negative, got {}",
                    self.id, units
                ))
                .into());
            }
        }
        if let Some(price) = self.price_per_unit {
            if price <= Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "Investment {} price per unit must be positive, got {}",
                    self.id, price
                ))
                .into());
            }
        }
        Ok(())
    }
}
