//! Change batch submission.

use zone_reconciler_provider::{ChangeBatch, ChangeEntry, ProviderError, ZoneProvider};

use crate::error::{CoreError, CoreResult};

/// Submit a change list as one atomic transaction.
///
/// An empty list returns `Ok(false)` without touching the network — this is
/// what makes repeated convergence passes idempotent. Otherwise exactly one
/// batch call is issued; the service applies all entries or none, so there is
/// no partial-success state to model. Returns `Ok(true)` when a batch was
/// submitted.
pub async fn submit_changes(
    provider: &dyn ZoneProvider,
    zone_id: &str,
    comment: &str,
    changes: Vec<ChangeEntry>,
) -> CoreResult<bool> {
    if changes.is_empty() {
        log::debug!("zone {zone_id}: no record set changes to submit");
        return Ok(false);
    }

    log::info!(
        "zone {zone_id}: submitting change batch with {} entries",
        changes.len()
    );
    let batch = ChangeBatch {
        comment: comment.to_string(),
        changes,
    };

    provider
        .submit_change_batch(zone_id, &batch)
        .await
        .map_err(|e| match e {
            ProviderError::ZoneNotFound { ref zone, .. } => CoreError::ZoneNotFound(zone.clone()),
            source => CoreError::Submission {
                zone_id: zone_id.to_string(),
                source,
            },
        })?;

    Ok(true)
}
