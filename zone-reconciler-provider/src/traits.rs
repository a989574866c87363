use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ChangeBatch, CreateZoneRequest, ListCursor, RecordSetPage, RemoteZone};

/// The hosted-zone service boundary.
///
/// One implementation per remote authoritative DNS service. The reconciler
/// core drives convergence exclusively through this trait; it never talks to
/// a transport directly.
///
/// Implementations own transport concerns — credentials, regions, timeouts,
/// and retry of transient failures (see [`retry`](crate::retry)). The core
/// issues each call exactly once and treats every error as final.
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// Provider identifier, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Create a hosted zone.
    ///
    /// `req.caller_reference` must be unique per call; the service rejects a
    /// repeated reference for the same zone name with
    /// [`ZoneAlreadyExists`](crate::ProviderError::ZoneAlreadyExists).
    async fn create_zone(&self, req: &CreateZoneRequest) -> Result<RemoteZone>;

    /// Fetch a zone's current configuration.
    async fn get_zone(&self, zone_id: &str) -> Result<RemoteZone>;

    /// Replace the zone comment.
    ///
    /// `None` clears the comment.
    async fn update_zone_comment(&self, zone_id: &str, comment: Option<&str>) -> Result<()>;

    /// Delete a hosted zone.
    ///
    /// Fails with [`ZoneNotEmpty`](crate::ProviderError::ZoneNotEmpty) while
    /// non-protected record sets remain.
    async fn delete_zone(&self, zone_id: &str) -> Result<()>;

    /// List one page of the zone's record sets, resuming from `cursor`.
    ///
    /// Callers follow [`RecordSetPage::next`] until it is `None` to obtain the
    /// full listing in service order.
    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&ListCursor>,
    ) -> Result<RecordSetPage>;

    /// Apply a change batch as one transaction.
    ///
    /// All entries apply together or none do; a rejection surfaces as
    /// [`InvalidChangeBatch`](crate::ProviderError::InvalidChangeBatch)
    /// carrying the service's message verbatim.
    async fn submit_change_batch(&self, zone_id: &str, batch: &ChangeBatch) -> Result<()>;
}
