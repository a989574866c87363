//! Wire-level types shared between the reconciler core and provider
//! implementations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============ Record Types ============

/// DNS record set type.
///
/// The remote service accepts more types than the known set below, so this is
/// an open enumeration: unrecognized wire strings round-trip through
/// [`Other`](Self::Other) instead of failing to parse.
///
/// Serialized as the uppercase wire string (`"A"`, `"CNAME"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// Start-of-authority record. Present on every zone; protected.
    Soa,
    /// IPv4 address record.
    A,
    /// Text record.
    Txt,
    /// Name server record. Present on every zone; protected.
    Ns,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Pointer (reverse lookup) record.
    Ptr,
    /// Service locator record.
    Srv,
    /// Sender Policy Framework record (deprecated upstream, still served).
    Spf,
    /// IPv6 address record.
    Aaaa,
    /// Any record type outside the known set, kept verbatim.
    Other(String),
}

impl RecordType {
    /// Parse a wire string into a record type.
    ///
    /// Matching is case-insensitive; unknown types are preserved uppercased
    /// in [`Other`](Self::Other).
    #[must_use]
    pub fn from_wire(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "SOA" => Self::Soa,
            "A" => Self::A,
            "TXT" => Self::Txt,
            "NS" => Self::Ns,
            "CNAME" => Self::Cname,
            "MX" => Self::Mx,
            "PTR" => Self::Ptr,
            "SRV" => Self::Srv,
            "SPF" => Self::Spf,
            "AAAA" => Self::Aaaa,
            other => Self::Other(other.to_string()),
        }
    }

    /// The uppercase wire string for this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Soa => "SOA",
            Self::A => "A",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ptr => "PTR",
            Self::Srv => "SRV",
            Self::Spf => "SPF",
            Self::Aaaa => "AAAA",
            Self::Other(s) => s,
        }
    }

    /// Whether this type exists on every zone by default and is never subject
    /// to user-initiated deletion (SOA and NS).
    #[must_use]
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Soa | Self::Ns)
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&s))
    }
}

/// A single DNS record set: one (name, type) carrying one TTL and one or more
/// record values.
///
/// Value order is insignificant for equality comparisons but must be preserved
/// verbatim on resubmission — the remote service requires the exact current
/// value list when deleting or replacing a record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    /// Record name. Bare (no trailing dot) on the way in; the service returns
    /// it fully qualified.
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Time-to-live in seconds. Positive.
    pub ttl: u32,
    /// Record value bodies, opaque strings.
    pub values: Vec<String>,
}

impl RecordSet {
    /// Convenience constructor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        values: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            values,
        }
    }
}

// ============ Change Batches ============

/// Action applied to one record set within a change batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Create; fails if the (name, type) key already exists.
    Create,
    /// Create-or-replace. Idempotent, the preferred action for convergence.
    Upsert,
    /// Delete; requires the exact current value list.
    Delete,
}

impl std::fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Create => "CREATE",
            Self::Upsert => "UPSERT",
            Self::Delete => "DELETE",
        })
    }
}

/// One entry of a change batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEntry {
    /// What to do with the record set.
    pub action: ChangeAction,
    /// The record set payload. For [`ChangeAction::Delete`] this must carry
    /// the values currently live on the service.
    pub record_set: RecordSet,
}

impl ChangeEntry {
    /// Convenience constructor.
    #[must_use]
    pub fn new(action: ChangeAction, record_set: RecordSet) -> Self {
        Self { action, record_set }
    }
}

/// An ordered list of record mutations applied by the service as one
/// transaction: all entries apply together or none do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeBatch {
    /// Free-text comment stored with the change.
    pub comment: String,
    /// The mutations, in submission order.
    pub changes: Vec<ChangeEntry>,
}

// ============ Zones ============

/// Mutable zone configuration stored alongside the zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConfig {
    /// Free-text comment, at most 256 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A hosted zone as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteZone {
    /// Opaque service-assigned zone id (e.g. `"/hostedzone/Z3AK..."`).
    pub id: String,
    /// Fully qualified zone name, trailing dot included.
    pub name: String,
    /// Zone configuration.
    #[serde(default)]
    pub config: ZoneConfig,
}

/// Request payload for creating a hosted zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZoneRequest {
    /// Fully qualified zone name.
    pub name: String,
    /// Initial zone configuration.
    #[serde(default)]
    pub config: ZoneConfig,
    /// Required, unique per call. The service uses it to detect accidental
    /// double submission of the same create request; retries must generate a
    /// fresh value.
    pub caller_reference: String,
}

// ============ Record Listing ============

/// Opaque resume point for paginated record-set listing.
///
/// The service resumes listing from a (record name, record type) position
/// rather than a page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCursor {
    /// Name to resume from.
    pub record_name: String,
    /// Type to resume from.
    pub record_type: RecordType,
}

/// One page of a record-set listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetPage {
    /// Record sets in this page, in service order.
    pub record_sets: Vec<RecordSet>,
    /// Cursor for the next page, if the listing was truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ListCursor>,
}
