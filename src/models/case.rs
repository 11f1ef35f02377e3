//! Case metadata: case number and stay-home notice (SHN) period

use crate::validation::input::{
    SHN_DATE_FORMAT, SHN_PERIOD_SEPARATOR, parse_shn_period, validate_case_number,
};
use crate::validation::{ValidationError, ValidationResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of the case a person is tracked under
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CaseNumber(String);

impl CaseNumber {
    pub fn new(case_number: &str) -> ValidationResult<Self> {
        validate_case_number(case_number)?;
        Ok(Self(case_number.to_string()))
    }

    pub fn is_valid(case_number: &str) -> bool {
        validate_case_number(case_number).is_ok()
    }
}

string_value_type!(CaseNumber);

/// Stay-home notice period, an inclusive range of calendar dates
///
/// Parsed from and displayed as `YYYY-MM-DD => YYYY-MM-DD`.
///
/// # Example
///
/// ```rust
/// use casebook::models::ShnPeriod;
/// use chrono::NaiveDate;
///
/// let period = ShnPeriod::new("2021-04-01 => 2021-04-15").unwrap();
/// assert_eq!(period.duration_days(), 15);
/// assert!(period.contains(NaiveDate::from_ymd_opt(2021, 4, 15).unwrap()));
/// assert_eq!(period.to_string(), "2021-04-01 => 2021-04-15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShnPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ShnPeriod {
    pub fn new(period: &str) -> ValidationResult<Self> {
        let (start, end) = parse_shn_period(period)?;
        Ok(Self { start, end })
    }

    pub fn is_valid(period: &str) -> bool {
        parse_shn_period(period).is_ok()
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both the start and end date
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `date` falls inside the period (inclusive on both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for ShnPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.start.format(SHN_DATE_FORMAT),
            SHN_PERIOD_SEPARATOR,
            self.end.format(SHN_DATE_FORMAT)
        )
    }
}

impl FromStr for ShnPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ShnPeriod {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ShnPeriod> for String {
    fn from(value: ShnPeriod) -> Self {
        value.to_string()
    }
}
