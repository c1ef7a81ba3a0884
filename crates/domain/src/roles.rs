//! Process-wide registry of recognized role principals.
//!
//! Roles are registered once during application bootstrap and read whenever
//! an [`AuditUser`](crate::value_objects::AuditUser) is built from a bare
//! identifier. Reads take a shared lock, so concurrent readers never block
//! each other.

use std::collections::HashSet;
use std::sync::{LazyLock, PoisonError, RwLock};

static ROLES: LazyLock<RwLock<HashSet<String>>> = LazyLock::new(|| RwLock::new(HashSet::new()));

/// Registers one or more role names.
///
/// Names are trimmed; blank names are ignored and names already present are
/// left untouched. Returns how many names were newly added.
///
/// # Example
///
/// ```
/// use coursekit_domain::roles::{is_registered_role, register_roles};
///
/// register_roles(["registrar", "system"]);
/// assert!(is_registered_role("registrar"));
/// assert_eq!(register_roles(["registrar"]), 0);
/// ```
pub fn register_roles<I, S>(roles: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // The set has no cross-entry invariant, so a poisoned lock is still usable.
    let mut registry = ROLES.write().unwrap_or_else(PoisonError::into_inner);
    let mut added = 0;
    for role in roles {
        let role = role.as_ref().trim();
        if role.is_empty() {
            continue;
        }
        if registry.insert(role.to_string()) {
            tracing::debug!(role, "registered role");
            added += 1;
        }
    }
    added
}

/// Whether `role` exactly matches a registered role name.
pub fn is_registered_role(role: &str) -> bool {
    ROLES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(role)
}

/// Snapshot of all registered role names, sorted.
pub fn registered_roles() -> Vec<String> {
    let mut roles: Vec<String> = ROLES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .cloned()
        .collect();
    roles.sort();
    roles
}
