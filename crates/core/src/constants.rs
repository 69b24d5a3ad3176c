/// Grouping id used for the whole-portfolio performance summary
pub const PORTFOLIO_TOTAL_ID: &str = "TOTAL";

/// Decimal precision for monetary values in chart series
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for allocation percentages
pub const PERCENTAGE_DECIMAL_PRECISION: u32 = 1;

/// Year length used to annualize cash flow offsets (not 365.25)
pub const DAYS_PER_YEAR: f64 = 365.0;

pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Largest magnitude the SIP projector reports (2^53 - 1)
pub const MAX_SAFE_VALUE: f64 = 9_007_199_254_740_991.0;

/// XIRR solver defaults
pub const DEFAULT_XIRR_GUESS: f64 = 0.1;
pub const DEFAULT_XIRR_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_XIRR_TOLERANCE: f64 = 1e-7;

/// Projection curve sampling: monthly up to 24 months, quarterly up to 60, semiannual beyond
pub const MONTHLY_SAMPLING_LIMIT: i32 = 24;
pub const QUARTERLY_SAMPLING_LIMIT: i32 = 60;
