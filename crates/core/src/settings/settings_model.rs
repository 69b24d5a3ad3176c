use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::assets::AssetCategory;
use crate::constants::{DEFAULT_XIRR_GUESS, DEFAULT_XIRR_MAX_ITERATIONS, DEFAULT_XIRR_TOLERANCE};
use crate::errors::{Error, Result};

/// Chart color tokens, resolved against CSS variables by the presentation layer.
pub const CHART_COLOR_VALUE: &str = "var(--chart-value)";
pub const CHART_COLOR_ACCENT_1: &str = "var(--chart-accent-1)";
pub const CHART_COLOR_ACCENT_2: &str = "var(--chart-accent-2)";
pub const CHART_COLOR_ACCENT_3: &str = "var(--chart-accent-3)";
pub const CHART_COLOR_ACCENT_4: &str = "var(--chart-accent-4)";
pub const CHART_COLOR_ACCENT_5: &str = "var(--chart-accent-5)";

/// Newton-Raphson knobs for the XIRR solver.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct XirrSettings {
    /// Starting rate for the iteration
    pub guess: f64,
    pub max_iterations: u32,
    /// Convergence threshold on |NPV|
    pub tolerance: f64,
}

impl Default for XirrSettings {
    fn default() -> Self {
        Self {
            guess: DEFAULT_XIRR_GUESS,
            max_iterations: DEFAULT_XIRR_MAX_ITERATIONS,
            tolerance: DEFAULT_XIRR_TOLERANCE,
        }
    }
}

impl XirrSettings {
    pub fn validate(&self) -> Result<()> {
        if !self.guess.is_finite() || self.guess <= -1.0 {
            return Err(Error::InvalidConfigValue(format!(
                "xirr.guess must be a finite rate above -1, got {}",
                self.guess
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfigValue(
                "xirr.maxIterations must be at least 1".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "xirr.tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Colors for the allocation chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartSettings {
    /// Explicit color per category
    pub category_colors: HashMap<AssetCategory, String>,
    /// Cycled for categories without an explicit color
    pub palette: Vec<String>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        let category_colors = HashMap::from([
            (AssetCategory::MutualFund, CHART_COLOR_VALUE.to_string()),
            (AssetCategory::Etf, CHART_COLOR_ACCENT_2.to_string()),
            (AssetCategory::Stock, CHART_COLOR_ACCENT_1.to_string()),
            (AssetCategory::Crypto, CHART_COLOR_ACCENT_3.to_string()),
            (AssetCategory::Other, CHART_COLOR_ACCENT_4.to_string()),
        ]);
        let palette = [
            CHART_COLOR_VALUE,
            CHART_COLOR_ACCENT_2,
            CHART_COLOR_ACCENT_1,
            CHART_COLOR_ACCENT_3,
            CHART_COLOR_ACCENT_4,
            CHART_COLOR_ACCENT_5,
        ]
        .iter()
        .map(|color| color.to_string())
        .collect();

        Self {
            category_colors,
            palette,
        }
    }
}

impl ChartSettings {
    /// Color for a category; `index` is the category's position among the
    /// allocation slices and picks from the palette when no color is configured.
    pub fn color_for(&self, category: AssetCategory, index: usize) -> String {
        if let Some(color) = self.category_colors.get(&category) {
            return color.clone();
        }
        if self.palette.is_empty() {
            return CHART_COLOR_VALUE.to_string();
        }
        self.palette[index % self.palette.len()].clone()
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::InvalidConfigValue(
                "charts.palette must contain at least one color".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the calculation core.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationSettings {
    pub xirr: XirrSettings,
    pub charts: ChartSettings,
}

impl CalculationSettings {
    /// Parses settings from JSON; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.xirr.validate()?;
        self.charts.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalculationSettings::default();
        assert_eq!(settings.xirr.guess, 0.1);
        assert_eq!(settings.xirr.max_iterations, 100);
        assert_eq!(settings.xirr.tolerance, 1e-7);
        assert_eq!(settings.charts.palette.len(), 6);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_overrides() {
        let settings = CalculationSettings::from_json(
            r##"{ "xirr": { "maxIterations": 250 }, "charts": { "categoryColors": { "crypto": "#f7931a" } } }"##,
        )
        .unwrap();

        assert_eq!(settings.xirr.max_iterations, 250);
        assert_eq!(settings.xirr.guess, 0.1);
        assert_eq!(
            settings.charts.color_for(AssetCategory::Crypto, 0),
            "#f7931a"
        );
        assert_eq!(
            settings.charts.color_for(AssetCategory::Stock, 4),
            CHART_COLOR_ACCENT_4
        );
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        assert_eq!(
            CalculationSettings::from_json("{}").unwrap(),
            CalculationSettings::default()
        );
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        assert!(CalculationSettings::from_json(r#"{ "xirr": { "maxIterations": 0 } }"#).is_err());
        assert!(CalculationSettings::from_json(r#"{ "xirr": { "tolerance": -1.0 } }"#).is_err());
        assert!(CalculationSettings::from_json(r#"{ "xirr": { "guess": -1.5 } }"#).is_err());
        assert!(CalculationSettings::from_json(r#"{ "charts": { "palette": [] } }"#).is_err());
        assert!(CalculationSettings::from_json("not json").is_err());
    }

    #[test]
    fn test_color_for_cycles_palette() {
        let charts = ChartSettings {
            category_colors: HashMap::new(),
            palette: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(charts.color_for(AssetCategory::Etf, 0), "a");
        assert_eq!(charts.color_for(AssetCategory::Etf, 1), "b");
        assert_eq!(charts.color_for(AssetCategory::Etf, 2), "a");
    }
}
