//! Core type definitions.

mod record;
mod zone;

pub use record::{DesiredAction, DesiredRecordSet, RecordKey};
pub use zone::{DesiredZone, ObservedZone};

// Wire types from the boundary crate, re-exported for convenience
pub use zone_reconciler_provider::{
    ChangeAction, ChangeBatch, ChangeEntry, CreateZoneRequest, ListCursor, RecordSet,
    RecordSetPage, RecordType, RemoteZone, ZoneConfig,
};
