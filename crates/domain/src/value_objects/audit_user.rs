//! Principal credited in the audit trail

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::roles::is_registered_role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum PrincipalKind {
    Email,
    Role,
}

/// A validated principal: either an email address or a registered role name.
///
/// Inputs containing `@` are treated as email addresses and need a non-empty
/// local part and domain. Anything else must exactly match a role in the
/// [role registry](crate::roles). Surrounding whitespace is dropped before
/// either check, the same way the registry trims names on registration; the
/// match itself is case-sensitive.
///
/// # Example
///
/// ```
/// use coursekit_domain::roles::register_roles;
/// use coursekit_domain::value_objects::AuditUser;
///
/// register_roles(["system"]);
///
/// assert!(AuditUser::new("jane@example.com").unwrap().is_email());
/// assert!(AuditUser::new("system").unwrap().is_role());
/// assert!(AuditUser::new("nobody").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuditUser {
    value: String,
    kind: PrincipalKind,
}

impl AuditUser {
    /// Create a new audit user.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrincipal` if:
    /// - The input is empty after trimming
    /// - The input contains `@` but the local part or domain is empty, or it
    ///   contains more than one `@`
    /// - The input is not an email and is not a registered role
    pub fn new(principal: impl Into<String>) -> Result<Self, DomainError> {
        let principal = principal.into();
        let trimmed = principal.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_principal("principal cannot be empty"));
        }

        if let Some((local, domain)) = trimmed.split_once('@') {
            if local.is_empty() || domain.is_empty() || domain.contains('@') {
                return Err(DomainError::invalid_principal(format!(
                    "'{trimmed}' is not a valid email address"
                )));
            }
            return Ok(Self {
                value: trimmed.to_string(),
                kind: PrincipalKind::Email,
            });
        }

        if !is_registered_role(trimmed) {
            return Err(DomainError::invalid_principal(format!(
                "role '{trimmed}' is not registered"
            )));
        }
        Ok(Self {
            value: trimmed.to_string(),
            kind: PrincipalKind::Role,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_email(&self) -> bool {
        self.kind == PrincipalKind::Email
    }

    pub fn is_role(&self) -> bool {
        self.kind == PrincipalKind::Role
    }
}

impl fmt::Display for AuditUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for AuditUser {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AuditUser> for String {
    fn from(user: AuditUser) -> String {
        user.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::register_roles;

    mod email {
        use super::*;

        #[test]
        fn accepts_email_shaped_input() {
            let user = AuditUser::new("jane.doe@example.com").unwrap();
            assert_eq!(user.as_str(), "jane.doe@example.com");
            assert!(user.is_email());
            assert!(!user.is_role());
        }

        #[test]
        fn does_not_consult_role_registry() {
            assert!(AuditUser::new("never-registered@example.com").is_ok());
        }

        #[test]
        fn rejects_missing_parts() {
            for input in ["@example.com", "jane@", "@", "a@b@c"] {
                let err = AuditUser::new(input).unwrap_err();
                assert!(matches!(err, DomainError::InvalidPrincipal(_)), "{input:?}");
            }
        }
    }

    mod role {
        use super::*;

        #[test]
        fn accepts_registered_role() {
            register_roles(["audit-user-test-admin"]);
            let user = AuditUser::new("audit-user-test-admin").unwrap();
            assert!(user.is_role());
            assert_eq!(user.to_string(), "audit-user-test-admin");
        }

        #[test]
        fn surrounding_whitespace_is_trimmed_before_lookup() {
            register_roles(["audit-user-test-padded"]);
            let user = AuditUser::new("  audit-user-test-padded\t").unwrap();
            assert!(user.is_role());
            assert_eq!(user.as_str(), "audit-user-test-padded");
        }

        #[test]
        fn lookup_is_case_sensitive_and_whole_name() {
            register_roles(["audit-user-test-exact"]);
            for input in [
                "Audit-User-Test-Exact",
                "audit-user-test-exac",
                "audit-user-test-exact-2",
                "audit user-test-exact",
            ] {
                let err = AuditUser::new(input).unwrap_err();
                assert!(matches!(err, DomainError::InvalidPrincipal(_)), "{input:?}");
            }
        }

        #[test]
        fn rejects_unregistered_role() {
            let err = AuditUser::new("audit-user-test-ghost").unwrap_err();
            assert!(matches!(err, DomainError::InvalidPrincipal(_)));
            assert!(err.to_string().contains("audit-user-test-ghost"));
        }
    }

    #[test]
    fn rejects_blank_input() {
        for input in ["", "   ", "\t"] {
            assert!(matches!(
                AuditUser::new(input),
                Err(DomainError::InvalidPrincipal(_))
            ));
        }
    }

    #[test]
    fn serde_round_trips_through_string() {
        let user = AuditUser::new("ops@example.com").unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, "\"ops@example.com\"");
        let back: AuditUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
        assert!(serde_json::from_str::<AuditUser>("\"audit-user-test-unknown\"").is_err());
    }
}
