//! Observed-state snapshots of a remote zone.

use zone_reconciler_provider::{ProviderError, ZoneProvider};

use crate::error::{CoreError, CoreResult};
use crate::types::ObservedZone;

/// Fetch the observed state of a zone: its configuration plus the complete
/// record-set listing.
///
/// Pagination is followed transparently; the result is one flat sequence in
/// service order. Read-only, no retries of its own — transient-failure policy
/// belongs to the transport.
pub async fn fetch_snapshot(provider: &dyn ZoneProvider, zone_id: &str) -> CoreResult<ObservedZone> {
    let zone = provider.get_zone(zone_id).await.map_err(map_not_found)?;

    let mut record_sets = Vec::new();
    let mut cursor = None;
    loop {
        let page = provider
            .list_record_sets(zone_id, cursor.as_ref())
            .await
            .map_err(map_not_found)?;
        record_sets.extend(page.record_sets);
        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    log::debug!(
        "snapshot of zone {} ({}): {} record sets",
        zone.name,
        zone.id,
        record_sets.len()
    );

    Ok(ObservedZone {
        id: zone.id,
        name: zone.name,
        comment: zone.config.comment,
        record_sets,
    })
}

fn map_not_found(e: ProviderError) -> CoreError {
    match e {
        ProviderError::ZoneNotFound { ref zone, .. } => CoreError::ZoneNotFound(zone.clone()),
        other => CoreError::Provider(other),
    }
}
