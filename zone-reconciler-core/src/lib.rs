//! # zone-reconciler-core
//!
//! Converges a user-declared hosted zone — a name, a comment, and a set of
//! record sets — against the live state of a remote authoritative DNS service,
//! submitting the minimal change batch needed to make remote state match
//! desired state.
//!
//! The remote service is reached exclusively through the
//! [`ZoneProvider`](zone_reconciler_provider::ZoneProvider) boundary trait; this
//! crate owns everything in between:
//!
//! - **Name normalization** — the trailing-dot policy. Callers supply bare
//!   names; input already carrying the qualifier is rejected as ambiguous.
//! - **Validation** — identity-key uniqueness and per-record constraints,
//!   always before the first remote call.
//! - **Snapshots** — the full paginated record-set listing, flattened.
//! - **Diffing** — the keyed CREATE/UPSERT/DELETE change list. Deletion is
//!   opt-in per record; omission never deletes.
//! - **Submission** — one atomic change batch per pass, skipped when empty.
//! - **Lifecycle** — [`ZoneReconciler`] sequences create/update/destroy and
//!   carries the compensating actions (orphan-zone rollback, comment revert)
//!   for multi-step operations that fail partway.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use zone_reconciler_core::{CoreResult, DesiredRecordSet, DesiredZone, ZoneReconciler};
//! use zone_reconciler_core::types::{RecordSet, RecordType};
//! use zone_reconciler_provider::ZoneProvider;
//!
//! async fn converge(provider: Arc<dyn ZoneProvider>) -> CoreResult<()> {
//!     let reconciler = ZoneReconciler::new(provider);
//!
//!     let desired = DesiredZone::new("feegle.com")
//!         .with_comment("The zone stands alone.")
//!         .with_record_sets(vec![DesiredRecordSet::ensure(RecordSet::new(
//!             "some-api-host.feegle.com",
//!             RecordType::Cname,
//!             3600,
//!             vec!["some-other-host".to_string()],
//!         ))]);
//!
//!     let zone = reconciler.reconcile_create(&desired).await?;
//!     // a second pass with the same input diffs to nothing and submits nothing
//!     reconciler.reconcile_update(&desired, &zone.id).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ZoneReconciler;
pub use types::{DesiredAction, DesiredRecordSet, DesiredZone, ObservedZone, RecordKey};
