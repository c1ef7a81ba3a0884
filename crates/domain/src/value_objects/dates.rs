//! Calendar date and date range value objects
//!
//! `Date` is a civil date with no time-of-day and no timezone. Its only
//! textual form is the zero-padded ISO 8601 calendar date `YYYY-MM-DD`,
//! used both for parsing and for display.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years representable in the four-digit `YYYY` form.
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

// ============================================================================
// Date
// ============================================================================

/// A validated calendar date.
///
/// # Example
///
/// ```
/// use coursekit_domain::value_objects::Date;
///
/// let date = Date::parse("2025-10-01").unwrap();
/// assert_eq!(date.to_string(), "2025-10-01");
/// assert!(Date::parse("2025-02-30").is_err());
/// assert!(Date::parse("2025-1-5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(NaiveDate);

impl Date {
    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the input is not exactly ten
    /// characters of the form `DDDD-DD-DD`, or does not name a real calendar
    /// date.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        if !has_canonical_shape(input) {
            return Err(DomainError::validation(format!(
                "date '{input}' must use the YYYY-MM-DD format"
            )));
        }
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map(Self)
            .map_err(|e| DomainError::validation(format!("date '{input}' is not valid: {e}")))
    }

    /// Build a date from its components.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the year falls outside
    /// `0000..=9999` or the components do not name a real calendar date
    /// (e.g. February 30).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DomainError::validation(format!(
                "year {year} is outside {MIN_YEAR:04}..={MAX_YEAR}"
            )));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "{year:04}-{month:02}-{day:02} is not a valid calendar date"
                ))
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

fn has_canonical_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Date {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Date> for String {
    fn from(date: Date) -> String {
        date.to_string()
    }
}

// ============================================================================
// DateRange
// ============================================================================

/// An inclusive range of dates with `start <= end`.
///
/// # Example
///
/// ```
/// use coursekit_domain::value_objects::{Date, DateRange};
///
/// let start = Date::parse("2025-11-01").unwrap();
/// let end = Date::parse("2025-11-30").unwrap();
/// let period = DateRange::new(start, end).unwrap();
///
/// assert_eq!(period.days(), 30);
/// assert!(DateRange::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange", into = "RawDateRange")]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a new date range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::validation(format!(
                "start date {start} must not be after end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether `date` falls within the range (both ends inclusive).
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end.0 - self.start.0).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

#[derive(Serialize, Deserialize)]
struct RawDateRange {
    start: Date,
    end: Date,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = DomainError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<DateRange> for RawDateRange {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
