//! # zone-reconciler-provider
//!
//! The hosted-zone service boundary for the zone reconciler: the
//! [`ZoneProvider`] trait, the wire-level types it speaks, and the unified
//! [`ProviderError`] taxonomy.
//!
//! The reconciler core ([`zone-reconciler-core`]) is written entirely against
//! this boundary; concrete service bindings (credentials, signing, HTTP) live
//! in separate crates that implement [`ZoneProvider`].
//!
//! [`zone-reconciler-core`]: https://crates.io/crates/zone-reconciler-core
//!
//! ## The boundary
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use zone_reconciler_provider::{ListCursor, Result, ZoneProvider};
//!
//! async fn dump_records(provider: Arc<dyn ZoneProvider>, zone_id: &str) -> Result<()> {
//!     let mut cursor: Option<ListCursor> = None;
//!     loop {
//!         let page = provider.list_record_sets(zone_id, cursor.as_ref()).await?;
//!         for rs in &page.record_sets {
//!             println!("{} {} ttl={}", rs.name, rs.record_type, rs.ttl);
//!         }
//!         match page.next {
//!             Some(next) => cursor = Some(next),
//!             None => return Ok(()),
//!         }
//!     }
//! }
//! ```
//!
//! ## Error handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Remote
//! messages are carried verbatim in the error variants — nothing is rewritten
//! between the service and the caller.
//!
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) should be
//! absorbed by the transport via [`retry::with_retry`]; business errors
//! propagate immediately.

mod error;
mod traits;
mod types;

pub mod retry;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export the boundary trait
pub use traits::ZoneProvider;

// Re-export wire types
pub use types::{
    ChangeAction, ChangeBatch, ChangeEntry, CreateZoneRequest, ListCursor, RecordSet,
    RecordSetPage, RecordType, RemoteZone, ZoneConfig,
};
