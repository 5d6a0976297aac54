use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A reporting month, written `YYYY-MM`.
///
/// Ordering is chronological: by year, then by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i16,
    month: i8,
}

impl Period {
    pub fn new(year: i16, month: i8) -> Result<Self, CoreError> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::InvalidPeriod(format!(
                "month {month} is outside 1-12"
            )));
        }
        if !(0..=9999).contains(&year) {
            return Err(CoreError::InvalidPeriod(format!(
                "year {year} is outside 0-9999"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i16 {
        self.year
    }

    pub fn month(&self) -> i8 {
        self.month
    }
}

impl TryFrom<jiff::civil::Date> for Period {
    type Error = CoreError;

    fn try_from(date: jiff::civil::Date) -> Result<Self, Self::Error> {
        Period::new(date.year(), date.month())
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| CoreError::InvalidPeriod(format!("expected YYYY-MM, got '{s}'")))?;

        if year.len() != 4 || month.len() != 2 {
            return Err(CoreError::InvalidPeriod(format!(
                "expected YYYY-MM, got '{s}'"
            )));
        }

        let year: i16 = year
            .parse()
            .map_err(|_| CoreError::InvalidPeriod(format!("bad year in '{s}'")))?;
        let month: i8 = month
            .parse()
            .map_err(|_| CoreError::InvalidPeriod(format!("bad month in '{s}'")))?;

        Period::new(year, month)
    }
}

impl TryFrom<String> for Period {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
