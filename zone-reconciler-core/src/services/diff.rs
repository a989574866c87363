//! The record-set diff engine.
//!
//! Computes the minimal change list that converges an observed zone to a
//! desired configuration, keyed by the (name, type) identity of each record
//! set.

use std::collections::HashMap;

use crate::types::{
    ChangeAction, ChangeEntry, DesiredAction, DesiredRecordSet, RecordKey, RecordSet,
};

/// Diff a desired configuration against an observed snapshot.
///
/// For each desired `Ensure` entry: absent or content-changed keys emit an
/// `UPSERT` (create-or-replace is idempotent, so it serves both cases);
/// value-equal keys are omitted. For each `Remove` entry present remotely, a
/// `DELETE` is emitted carrying the **observed** record set — the service
/// requires the exact current value list on delete, not the caller's intended
/// one. A `Remove` of a key that is already absent is a no-op.
///
/// Keys only present in the observed snapshot are left alone: deletion is
/// opt-in per record, never implied by omission.
///
/// Output order follows the desired list, so repeated passes produce
/// identical batches.
#[must_use]
pub fn diff(desired: &[DesiredRecordSet], observed: &[RecordSet]) -> Vec<ChangeEntry> {
    let observed_by_key: HashMap<RecordKey, &RecordSet> =
        observed.iter().map(|rs| (RecordKey::of(rs), rs)).collect();

    let mut changes = Vec::new();

    for entry in desired {
        let key = entry.key();
        match entry.action {
            DesiredAction::Ensure => match observed_by_key.get(&key) {
                Some(current) if content_equal(&entry.record_set, current) => {
                    log::debug!("record set [{key}] already converged, skipping");
                }
                _ => {
                    changes.push(ChangeEntry::new(
                        ChangeAction::Upsert,
                        entry.record_set.clone(),
                    ));
                }
            },
            DesiredAction::Remove => match observed_by_key.get(&key) {
                Some(current) => {
                    changes.push(ChangeEntry::new(ChangeAction::Delete, (*current).clone()));
                }
                None => {
                    log::debug!("record set [{key}] tagged for removal is already absent");
                }
            },
        }
    }

    changes
}

/// One `DELETE` per non-protected observed record set, for purging a zone
/// before deletion. SOA and NS exist on every zone by default and are
/// excluded. Each delete carries the observed record set verbatim.
#[must_use]
pub fn purge_changes(observed: &[RecordSet]) -> Vec<ChangeEntry> {
    observed
        .iter()
        .filter(|rs| !rs.record_type.is_protected())
        .map(|rs| ChangeEntry::new(ChangeAction::Delete, rs.clone()))
        .collect()
}

/// Content equality for diffing: same TTL and the same value multiset.
///
/// Value order is insignificant (the service returns values in its own
/// order), but every value must appear the same number of times.
fn content_equal(a: &RecordSet, b: &RecordSet) -> bool {
    if a.ttl != b.ttl || a.values.len() != b.values.len() {
        return false;
    }
    let mut a_values: Vec<&str> = a.values.iter().map(String::as_str).collect();
    let mut b_values: Vec<&str> = b.values.iter().map(String::as_str).collect();
    a_values.sort_unstable();
    b_values.sort_unstable();
    a_values == b_values
}
