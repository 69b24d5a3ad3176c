//! Price points and the per-asset price index.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::MonthKey;

/// A recorded price for an asset on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub asset_id: String,
    pub price: Decimal,
    pub price_date: NaiveDate,
}

impl PricePoint {
    pub fn validate(&self) -> Result<()> {
        if self.asset_id.trim().is_empty() {
            return Err(ValidationError::MissingField("asset_id".to_string()).into());
        }
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Price for asset {} on {} must be positive, got {}",
                self.asset_id, self.price_date, self.price
            ))
            .into());
        }
        Ok(())
    }
}

/// Price history indexed by asset, each history sorted by date ascending.
///
/// Non-positive prices are dropped on construction so every lookup yields a
/// usable valuation price.
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    by_asset: HashMap<String, Vec<PricePoint>>,
}

impl PriceBook {
    pub fn new<I>(points: I) -> Self
    where
        I: IntoIterator<Item = PricePoint>,
    {
        let mut by_asset: HashMap<String, Vec<PricePoint>> = HashMap::new();
        for point in points {
            if point.price <= Decimal::ZERO {
                debug!(
                    "Dropping non-positive price {} for asset {} on {}",
                    point.price, point.asset_id, point.price_date
                );
                continue;
            }
            by_asset.entry(point.asset_id.clone()).or_default().push(point);
        }
        for history in by_asset.values_mut() {
            history.sort_by_key(|point| point.price_date);
        }
        Self { by_asset }
    }

    pub fn history(&self, asset_id: &str) -> &[PricePoint] {
        self.by_asset
            .get(asset_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn latest(&self, asset_id: &str) -> Option<&PricePoint> {
        self.history(asset_id).last()
    }

    pub fn latest_price(&self, asset_id: &str) -> Option<Decimal> {
        self.latest(asset_id).map(|point| point.price)
    }

    /// Latest price recorded in or before `month`.
    pub fn price_as_of_month(&self, asset_id: &str, month: MonthKey) -> Option<Decimal> {
        self.history(asset_id)
            .iter()
            .rev()
            .find(|point| MonthKey::from_date(point.price_date) <= month)
            .map(|point| point.price)
    }

    /// Price used to value a holding in `month`: the as-of price, falling back
    /// to the latest known price when the history starts after `month`.
    pub fn price_for_month(&self, asset_id: &str, month: MonthKey) -> Option<Decimal> {
        self.price_as_of_month(asset_id, month)
            .or_else(|| self.latest_price(asset_id))
    }

    pub fn latest_prices(&self) -> HashMap<String, Decimal> {
        self.by_asset
            .iter()
            .filter_map(|(asset_id, history)| {
                history.last().map(|point| (asset_id.clone(), point.price))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.by_asset.is_empty()
    }
}
