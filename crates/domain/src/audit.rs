//! Audit block attached to every entity
//!
//! Records the version plus who created and last modified the entity, and
//! when. [`Audit::touch`] is the only mutator; `created_by` and `created_at`
//! are fixed at creation.

use serde::Serialize;

use crate::value_objects::{AuditUser, Timestamp, Version};

/// Versioning and authorship metadata.
///
/// # Invariants
///
/// - `version >= 1` (enforced by `Version`)
/// - `updated_at >= created_at`
/// - every `touch` moves `version` forward by one and `updated_at` strictly
///   forward (short of the last representable instant)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Audit {
    version: Version,
    created_by: AuditUser,
    created_at: Timestamp,
    updated_by: AuditUser,
    updated_at: Timestamp,
}

impl Audit {
    /// Audit block for a freshly created entity.
    pub fn new(created_by: AuditUser, now: Timestamp) -> Self {
        Self {
            version: Version::initial(),
            updated_by: created_by.clone(),
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records a modification by `updated_by`.
    ///
    /// If `now` does not come after the previous `updated_at` (coarse or
    /// stalled clock), the smallest representable step past it is used. At
    /// the last representable instant `updated_at` stays put.
    pub fn touch(&mut self, updated_by: AuditUser, now: Timestamp) {
        self.version = self.version.next();
        self.updated_by = updated_by;
        self.updated_at = now.strictly_after(self.updated_at);
    }

    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    pub fn created_by(&self) -> &AuditUser {
        &self.created_by
    }

    #[inline]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    #[inline]
    pub fn updated_by(&self) -> &AuditUser {
        &self.updated_by
    }

    #[inline]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
