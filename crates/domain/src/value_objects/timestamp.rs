//! Instant-in-time value object
//!
//! Wraps `chrono::DateTime<Utc>` (nanosecond resolution). Human-facing output
//! is RFC 3339 with millisecond precision and a `Z` suffix.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Smallest step used when an instant has to move strictly past another.
const MIN_ADVANCE_MICROS: i64 = 1;

/// A UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Reads the host wall clock.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Parses an RFC 3339 timestamp, converting any offset to UTC.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the string is not valid RFC 3339.
    pub fn parse_rfc3339(input: &str) -> Result<Self, DomainError> {
        DateTime::parse_from_rfc3339(input)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| DomainError::validation(format!("timestamp '{input}' is not RFC 3339: {e}")))
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Returns `self`, or the smallest step past `previous` if `self` does not
    /// already come after it.
    ///
    /// At the end of the representable range there is no later instant;
    /// `previous` is returned unchanged.
    #[must_use]
    pub fn strictly_after(self, previous: Timestamp) -> Self {
        if self > previous {
            return self;
        }
        previous.saturating_add(Duration::microseconds(MIN_ADVANCE_MICROS))
    }

    /// Adds `step`, clamping to `self` if the result would not be representable.
    #[must_use]
    pub fn saturating_add(self, step: Duration) -> Self {
        self.0.checked_add_signed(step).map_or(self, Self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> Timestamp {
        Timestamp::from_datetime(Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn displays_as_rfc3339_with_millis() {
        let ts = Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 10, 1, 9, 30, 0).unwrap());
        assert_eq!(ts.to_string(), "2025-10-01T09:30:00.000Z");
    }

    #[test]
    fn parse_converts_offsets_to_utc() {
        let ts = Timestamp::parse_rfc3339("2025-10-01T10:30:00+01:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-10-01T09:30:00.000Z");
        assert!(Timestamp::parse_rfc3339("2025-10-01").is_err());
        assert!(Timestamp::parse_rfc3339("").is_err());
    }

    #[test]
    fn orders_by_instant() {
        assert!(at(1) < at(2));
        assert_eq!(at(5), at(5));
    }

    #[test]
    fn strictly_after_keeps_later_instants() {
        assert_eq!(at(10).strictly_after(at(5)), at(10));
    }

    #[test]
    fn strictly_after_nudges_equal_or_earlier_instants() {
        let previous = at(10);
        assert!(at(10).strictly_after(previous) > previous);
        assert!(at(3).strictly_after(previous) > previous);
    }

    #[test]
    fn strictly_after_at_max_instant_does_not_overflow() {
        let max = Timestamp::from_datetime(DateTime::<Utc>::MAX_UTC);
        assert_eq!(max.strictly_after(max), max);
        assert_eq!(at(0).strictly_after(max), max);
    }

    #[test]
    fn saturating_add_clamps_at_max_instant() {
        let max = Timestamp::from_datetime(DateTime::<Utc>::MAX_UTC);
        assert_eq!(max.saturating_add(Duration::seconds(1)), max);
        assert_eq!(at(1).saturating_add(Duration::seconds(1)), at(2));
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let json = serde_json::to_string(&at(0)).unwrap();
        assert_eq!(json, "\"1970-01-01T00:00:00Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, at(0));
    }

    #[test]
    fn now_is_recent() {
        let before = Utc::now();
        let ts = Timestamp::now();
        assert!(ts.as_datetime() >= before);
    }
}
