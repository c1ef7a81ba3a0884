//! Unified error types for the domain layer
//!
//! Every fallible operation in the domain returns [`DomainError`]. Value
//! objects fail with [`DomainError::Validation`] or
//! [`DomainError::InvalidPrincipal`]; the `Course` constructor wraps those in
//! [`DomainError::Invalid`] so callers see a stable prefix while the underlying
//! failure stays reachable through [`std::error::Error::source`].

use thiserror::Error;

/// Machine-readable classification of a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A precondition on externally supplied data was not met.
    Invalid,
    /// Something outside the caller's control failed (entropy source).
    Internal,
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Principal could not be accepted as an audit user
    #[error("Invalid principal: {0}")]
    InvalidPrincipal(String),

    /// Contextual wrapper over an underlying validation failure
    #[error("{context}: {source}")]
    Invalid {
        context: &'static str,
        #[source]
        source: Box<DomainError>,
    },

    /// Entropy source failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Creates a validation error for value-object precondition failures.
    ///
    /// # Example
    /// ```
    /// use coursekit_domain::DomainError;
    ///
    /// let err = DomainError::validation("value must be positive");
    /// assert_eq!(err.to_string(), "Validation failed: value must be positive");
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid principal error
    pub fn invalid_principal(msg: impl Into<String>) -> Self {
        Self::InvalidPrincipal(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Wraps `self` under a fixed, user-facing prefix.
    ///
    /// Internal errors pass through unchanged: the prefix names a violated
    /// precondition, which an entropy failure is not.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Internal(_) => self,
            other => Self::Invalid {
                context,
                source: Box::new(other),
            },
        }
    }

    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Internal(_) => ErrorCode::Internal,
            Self::Validation(_) | Self::InvalidPrincipal(_) | Self::Invalid { .. } => {
                ErrorCode::Invalid
            }
        }
    }

    /// Returns the prefix of a wrapped error, if any.
    pub fn context(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { context, .. } => Some(*context),
            _ => None,
        }
    }

    /// Returns the innermost error in the chain.
    pub fn root_cause(&self) -> &DomainError {
        match self {
            Self::Invalid { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
