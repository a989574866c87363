//! Local, pre-call validation of a desired configuration.
//!
//! Everything here runs before the first remote call: a configuration that
//! fails validation creates no partial remote state.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::services::name;
use crate::types::{DesiredAction, DesiredRecordSet, RecordKey};

/// Maximum zone comment length accepted by the remote service.
pub const MAX_COMMENT_LEN: usize = 256;

/// Enforce identity-key uniqueness across one desired configuration.
///
/// The first collision aborts. A key appearing with both `Ensure` and
/// `Remove` is reported as [`CoreError::ConflictingChange`] — the remote
/// transaction model forbids mutating one key twice in a batch — while a
/// plain repeat is [`CoreError::DuplicateKey`]. Both name the offending
/// (name, type) pair so the caller can present an actionable message.
pub fn verify_unique(record_sets: &[DesiredRecordSet]) -> CoreResult<()> {
    let mut seen: HashMap<RecordKey, DesiredAction> = HashMap::with_capacity(record_sets.len());

    for desired in record_sets {
        let key = desired.key();
        if let Some(prior_action) = seen.get(&key) {
            if *prior_action != desired.action {
                return Err(CoreError::ConflictingChange { key });
            }
            return Err(CoreError::DuplicateKey { key });
        }
        seen.insert(key, desired.action);
    }

    Ok(())
}

/// Per-record validation: bare names, positive TTL, non-empty values.
///
/// `Remove` entries only need a valid name — their TTL and values come from
/// the observed state when the delete is emitted.
pub fn validate_record_sets(record_sets: &[DesiredRecordSet]) -> CoreResult<()> {
    for desired in record_sets {
        let rs = &desired.record_set;
        name::validate_record_name(&rs.name)?;

        if desired.action == DesiredAction::Remove {
            continue;
        }
        if rs.ttl == 0 {
            return Err(CoreError::Validation(format!(
                "record set [{}] has a zero ttl; ttl must be a positive number of seconds",
                desired.key()
            )));
        }
        if rs.values.is_empty() {
            return Err(CoreError::Validation(format!(
                "record set [{}] declares no values",
                desired.key()
            )));
        }
    }

    Ok(())
}

/// Validate the zone comment length.
pub fn validate_comment(comment: Option<&str>) -> CoreResult<()> {
    if let Some(comment) = comment
        && comment.chars().count() > MAX_COMMENT_LEN
    {
        return Err(CoreError::Validation(format!(
            "zone comment exceeds {MAX_COMMENT_LEN} characters"
        )));
    }
    Ok(())
}
