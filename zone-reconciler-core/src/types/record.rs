//! Record-set identity and desired-state wrappers.

use serde::{Deserialize, Serialize};
use zone_reconciler_provider::{RecordSet, RecordType};

use crate::services::name::key_name;

/// Identity key of a record set: its (name, type) pair, case- and
/// trailing-dot-normalized.
///
/// Two record sets with equal keys are "the same" record set for diffing and
/// uniqueness purposes, regardless of TTL or values. Displays as
/// `"name, TYPE"` so error messages point at the exact offender.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordKey {
    /// Normalized record name: lowercase, no trailing dot.
    pub name: String,
    /// Record type.
    pub record_type: RecordType,
}

impl RecordKey {
    /// Build a key, normalizing the name.
    #[must_use]
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            name: key_name(name),
            record_type,
        }
    }

    /// The identity key of a record set.
    #[must_use]
    pub fn of(record_set: &RecordSet) -> Self {
        Self::new(&record_set.name, record_set.record_type.clone())
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.record_type)
    }
}

/// What the caller wants done with one desired record set.
///
/// Removal is opt-in per record: a desired configuration that merely omits a
/// previously created record does not delete it. Only an explicit
/// [`Remove`](Self::Remove) entry deletes, which keeps hand-managed or
/// third-party records on the same zone safe from silent data loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesiredAction {
    /// Converge the remote record set to the declared content.
    Ensure,
    /// Delete the remote record set, using its observed values.
    Remove,
}

/// One record set of a desired configuration, tagged with the action to take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredRecordSet {
    /// What to do.
    pub action: DesiredAction,
    /// The declared record set. For [`DesiredAction::Remove`] only the
    /// (name, type) identity matters; TTL and values are taken from the
    /// observed state when the delete is emitted.
    pub record_set: RecordSet,
}

impl DesiredRecordSet {
    /// A record set that should exist with the declared content.
    #[must_use]
    pub fn ensure(record_set: RecordSet) -> Self {
        Self {
            action: DesiredAction::Ensure,
            record_set,
        }
    }

    /// A record set explicitly tagged for removal.
    #[must_use]
    pub fn remove(record_set: RecordSet) -> Self {
        Self {
            action: DesiredAction::Remove,
            record_set,
        }
    }

    /// The identity key of this entry.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey::of(&self.record_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_normalizes_case_and_trailing_dot() {
        let a = RecordKey::new("API.Example.COM.", RecordType::Cname);
        let b = RecordKey::new("api.example.com", RecordType::Cname);
        assert_eq!(a, b);
    }

    #[test]
    fn key_distinguishes_types() {
        let a = RecordKey::new("api.example.com", RecordType::Cname);
        let b = RecordKey::new("api.example.com", RecordType::A);
        assert_ne!(a, b);
    }

    #[test]
    fn key_display_matches_error_format() {
        let key = RecordKey::new("Wooster.Chasm.com", RecordType::Cname);
        assert_eq!(key.to_string(), "wooster.chasm.com, CNAME");
    }
}
