//! Zone lifecycle orchestration: create, update, destroy.
//!
//! Zone creation/deletion and record-set submission are separate remote calls
//! with no shared transaction, so the orchestrator carries the compensating
//! actions: a failed record submission after a successful zone create deletes
//! the orphan zone; a failed submission after a comment update reverts the
//! comment.

use std::sync::Arc;

use uuid::Uuid;
use zone_reconciler_provider::{ProviderError, ZoneProvider};

use crate::error::{CoreError, CoreResult};
use crate::services::{diff, name, snapshot, submit, validate};
use crate::types::{
    CreateZoneRequest, DesiredAction, DesiredRecordSet, DesiredZone, RemoteZone, ZoneConfig,
};

/// Comment attached to convergence change batches.
const CONVERGE_COMMENT: &str = "Managed by zone-reconciler";

/// Comment attached to the purge batch issued before zone deletion.
const PURGE_COMMENT: &str = "Purging record sets prior to zone deletion";

/// Orchestrates zone convergence against one hosted-zone service.
///
/// Holds no per-zone state: every call rebuilds desired state from its
/// arguments and observed state from the service, so independent callers may
/// converge different zones concurrently.
pub struct ZoneReconciler {
    provider: Arc<dyn ZoneProvider>,
}

impl ZoneReconciler {
    /// Create a reconciler over the given service boundary.
    #[must_use]
    pub fn new(provider: Arc<dyn ZoneProvider>) -> Self {
        Self { provider }
    }

    /// Validate a desired record-set collection without touching the network.
    ///
    /// Checks identity-key uniqueness and per-record constraints (bare names,
    /// positive TTL, non-empty values).
    pub fn validate(record_sets: &[DesiredRecordSet]) -> CoreResult<()> {
        validate::validate_record_sets(record_sets)?;
        validate::verify_unique(record_sets)
    }

    /// Create a zone and submit its declared record sets.
    ///
    /// All local validation runs before the first remote call. The zone is
    /// created with a fresh caller reference — every attempt generates a new
    /// one, including caller-level retries after an ambiguous failure, which
    /// can leave a duplicate zone behind; inspect before retrying.
    ///
    /// If the record-set submission fails after the zone was created, the
    /// just-created zone is deleted again before the submission error is
    /// returned: a failed create leaves no orphan zone.
    pub async fn reconcile_create(&self, desired: &DesiredZone) -> CoreResult<RemoteZone> {
        name::validate_zone_name(&desired.name)?;
        validate::validate_comment(desired.comment.as_deref())?;
        Self::validate(&desired.record_sets)?;
        if let Some(removal) = desired
            .record_sets
            .iter()
            .find(|rs| rs.action == DesiredAction::Remove)
        {
            return Err(CoreError::Validation(format!(
                "record set [{}] is tagged for removal, but the zone does not exist yet",
                removal.key()
            )));
        }

        let request = CreateZoneRequest {
            name: name::qualify(&desired.name),
            config: ZoneConfig {
                comment: desired.comment.clone(),
            },
            caller_reference: fresh_caller_reference(),
        };
        let zone = self.provider.create_zone(&request).await?;
        log::info!("created zone {} ({})", zone.name, zone.id);

        let changes = diff::diff(&desired.record_sets, &[]);
        if let Err(e) =
            submit::submit_changes(self.provider.as_ref(), &zone.id, CONVERGE_COMMENT, changes)
                .await
        {
            log::warn!(
                "record set submission failed for new zone {}, rolling back zone creation: {e}",
                zone.id
            );
            if let Err(rollback_err) = self.provider.delete_zone(&zone.id).await {
                log::error!(
                    "rollback failed, zone {} is left behind: {rollback_err}",
                    zone.id
                );
            }
            return Err(e);
        }

        Ok(zone)
    }

    /// Converge an existing zone to the desired configuration.
    ///
    /// The comment is updated first when it differs, then the record-set diff
    /// is submitted; the two are independent remote calls issued in that fixed
    /// order, not one transaction. If the record submission fails after the
    /// comment was already changed, the comment is reverted to its prior
    /// observed value before the submission error is returned.
    pub async fn reconcile_update(&self, desired: &DesiredZone, zone_id: &str) -> CoreResult<()> {
        name::validate_zone_name(&desired.name)?;
        validate::validate_comment(desired.comment.as_deref())?;
        Self::validate(&desired.record_sets)?;

        let observed = snapshot::fetch_snapshot(self.provider.as_ref(), zone_id).await?;
        if !name::names_equal(&observed.name, &desired.name) {
            return Err(CoreError::Validation(format!(
                "zone {zone_id} is named '{}', not '{}'",
                observed.name, desired.name
            )));
        }

        let comment_changed = desired.comment != observed.comment;
        if comment_changed {
            log::info!("updating comment of zone {zone_id}");
            self.provider
                .update_zone_comment(zone_id, desired.comment.as_deref())
                .await?;
        }

        let changes = diff::diff(&desired.record_sets, &observed.record_sets);
        match submit::submit_changes(self.provider.as_ref(), zone_id, CONVERGE_COMMENT, changes)
            .await
        {
            Ok(_) => Ok(()),
            Err(e) => {
                if comment_changed {
                    log::warn!(
                        "record set submission failed for zone {zone_id}, reverting comment: {e}"
                    );
                    if let Err(revert_err) = self
                        .provider
                        .update_zone_comment(zone_id, observed.comment.as_deref())
                        .await
                    {
                        log::error!(
                            "comment revert failed for zone {zone_id}, comment is left updated: {revert_err}"
                        );
                    }
                }
                Err(e)
            }
        }
    }

    /// Delete a zone, optionally purging its record sets first.
    ///
    /// With `purge`, every non-protected observed record set (everything but
    /// SOA and NS) is deleted in one batch, using its exact observed values,
    /// before the zone-deletion call. A failed purge leaves the zone fully
    /// intact — deletion is not attempted.
    ///
    /// Without `purge`, deletion is attempted directly; the service refuses
    /// while non-protected record sets remain, surfacing as
    /// [`CoreError::Destroy`].
    pub async fn reconcile_destroy(&self, zone_id: &str, purge: bool) -> CoreResult<()> {
        if purge {
            let observed = snapshot::fetch_snapshot(self.provider.as_ref(), zone_id).await?;
            let changes = diff::purge_changes(&observed.record_sets);
            if !changes.is_empty() {
                log::info!(
                    "purging {} non-protected record sets from zone {} before deletion",
                    changes.len(),
                    observed.name
                );
            }
            submit::submit_changes(self.provider.as_ref(), zone_id, PURGE_COMMENT, changes)
                .await?;
        }

        self.provider
            .delete_zone(zone_id)
            .await
            .map_err(|e| match e {
                ProviderError::ZoneNotFound { ref zone, .. } => {
                    CoreError::ZoneNotFound(zone.clone())
                }
                source @ ProviderError::ZoneNotEmpty { .. } => CoreError::Destroy {
                    zone_id: zone_id.to_string(),
                    source,
                },
                other => CoreError::Provider(other),
            })?;

        log::info!("deleted zone {zone_id}");
        Ok(())
    }
}

/// A fresh uniqueness token for one create attempt.
///
/// The service uses it to detect accidental double submission of the same
/// request, not to make retries idempotent — so every attempt gets a new one.
fn fresh_caller_reference() -> String {
    format!(
        "zone-reconciler-{}",
        Uuid::new_v4().hyphenated().to_string().to_uppercase()
    )
}
