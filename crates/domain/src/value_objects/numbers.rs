//! Positive integer value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// An integer strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PositiveInt(i64);

impl PositiveInt {
    /// Create a new positive integer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value <= 0`.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::validation(format!(
                "value must be greater than zero, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for PositiveInt {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PositiveInt> for i64 {
    fn from(value: PositiveInt) -> i64 {
        value.0
    }
}
