//! Audit version counter

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Monotonic revision counter. Starts at 1 and only ever moves forward by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Version(u64);

impl Version {
    /// The version assigned on creation.
    pub const fn initial() -> Self {
        Self(1)
    }

    /// Restore a known version.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for version 0.
    pub fn new(value: u64) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::validation("version must be at least 1"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The version that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl TryFrom<u64> for Version {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Version> for u64 {
    fn from(version: Version) -> u64 {
        version.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_one() {
        assert_eq!(Version::initial().get(), 1);
        assert_eq!(Version::default(), Version::initial());
    }

    #[test]
    fn next_increments_by_one() {
        let v = Version::initial().next().next();
        assert_eq!(v.get(), 3);
        assert!(v > Version::initial());
    }

    #[test]
    fn zero_is_rejected() {
        assert!(Version::new(0).is_err());
        assert_eq!(Version::new(7).unwrap().get(), 7);
        assert!(serde_json::from_str::<Version>("0").is_err());
    }

    #[test]
    fn displays_with_prefix() {
        assert_eq!(Version::initial().to_string(), "v1");
    }
}
