use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::constants::MONTHS_PER_YEAR;

const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;
use crate::errors::{Error, Result, ValidationError};

/// A calendar month, rendered and parsed as a canonical `YYYY-MM` key.
///
/// Ordering is chronological (year first, then month). Only years 0000-9999
/// have a canonical key; `new` and parsing reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Creates a month key, rejecting months outside 1..=12 and years that do
    /// not fit four digits.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(Error::Validation(ValidationError::InvalidMonthKey(format!(
                "{}-{}",
                year, month
            ))));
        }
        Ok(Self { year, month })
    }

    /// Month of `date`. Years outside 0000-9999 are not clamped; their keys
    /// display but do not parse back.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month of the local wall clock.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following calendar month, rolling December over into January.
    pub fn succ(self) -> Self {
        if self.month == MONTHS_PER_YEAR {
            Self {
                year: self.year.saturating_add(1),
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The month `months` calendar months before this one.
    pub fn minus_months(self, months: u32) -> Self {
        let index = i64::from(self.year) * i64::from(MONTHS_PER_YEAR) + i64::from(self.month - 1)
            - i64::from(months);
        let months_per_year = i64::from(MONTHS_PER_YEAR);
        let year = index.div_euclid(months_per_year);
        Self {
            year: i32::try_from(year).unwrap_or(i32::MIN),
            month: index.rem_euclid(months_per_year) as u32 + 1,
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Validation(ValidationError::InvalidMonthKey(s.to_string()));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().all(|b| b.is_ascii_digit())
            || !month.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Iterator over every calendar month from `start` to `end`, both inclusive.
///
/// Keys are strictly increasing with no gaps. Yields nothing when `start > end`.
#[derive(Debug, Clone)]
pub struct MonthRange {
    next: Option<MonthKey>,
    end: MonthKey,
}

impl Iterator for MonthRange {
    type Item = MonthKey;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|month| *month <= self.end)?;
        self.next = if current == self.end {
            None
        } else {
            Some(current.succ())
        };
        Some(current)
    }
}

pub fn months_between(start: MonthKey, end: MonthKey) -> MonthRange {
    MonthRange {
        next: Some(start),
        end,
    }
}

/// Midnight UTC of the given calendar date.
pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
