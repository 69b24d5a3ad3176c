//! Asset domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Fixed set of asset categories an asset can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    MutualFund,
    Etf,
    Stock,
    Crypto,
    Other,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::MutualFund,
        AssetCategory::Etf,
        AssetCategory::Stock,
        AssetCategory::Crypto,
        AssetCategory::Other,
    ];

    /// Returns the wire/database id (snake_case).
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::MutualFund => "mutual_fund",
            AssetCategory::Etf => "etf",
            AssetCategory::Stock => "stock",
            AssetCategory::Crypto => "crypto",
            AssetCategory::Other => "other",
        }
    }

    /// Human readable label shown next to allocation slices.
    pub const fn label(&self) -> &'static str {
        match self {
            AssetCategory::MutualFund => "Mutual Fund",
            AssetCategory::Etf => "ETF",
            AssetCategory::Stock => "Stock",
            AssetCategory::Crypto => "Cryptocurrency",
            AssetCategory::Other => "Other",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AssetCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown asset category '{}'",
                    s
                )))
            })
    }
}

/// Asset record as supplied by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "category_id")]
    pub category: AssetCategory,
    pub currency: String,
}

impl Asset {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if self.currency.trim().is_empty() {
            return Err(ValidationError::MissingField("currency".to_string()).into());
        }
        Ok(())
    }
}
