pub mod number_utils;
pub mod time_utils;

pub use number_utils::{round_money, round_to};
pub use time_utils::{months_between, start_of_day_utc, MonthKey, MonthRange};
