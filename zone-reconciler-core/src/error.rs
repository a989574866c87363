//! Unified error type for the reconciler core.

use serde::Serialize;
use thiserror::Error;

use crate::types::RecordKey;

// Re-export the boundary error type
pub use zone_reconciler_provider::ProviderError;

/// Core layer error type.
///
/// Local validation errors (`InvalidName`, `DuplicateKey`, `ConflictingChange`,
/// `Validation`) are always raised before any remote call is made. Remote
/// errors carry the service's message verbatim inside the wrapped
/// [`ProviderError`].
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A zone or record name violates the trailing-dot policy.
    #[error("invalid name '{name}': {reason}")]
    InvalidName {
        /// The offending input.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Two desired record sets share one (name, type) identity key.
    #[error("duplicate record set in desired configuration: [{key}]")]
    DuplicateKey {
        /// The colliding identity key.
        key: RecordKey,
    },

    /// The same identity key was requested for both removal and upsert in one
    /// pass. The remote transaction model forbids mutating one key twice in a
    /// batch, so this is a caller error, not something to resolve silently.
    #[error("record set [{key}] is requested for both removal and upsert in one pass")]
    ConflictingChange {
        /// The conflicted identity key.
        key: RecordKey,
    },

    /// A desired record set or zone attribute failed local validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The zone does not exist on the remote service.
    #[error("zone not found: {0}")]
    ZoneNotFound(String),

    /// A change batch was rejected by the remote service.
    #[error("change batch submission failed for zone {zone_id}: {source}")]
    Submission {
        /// Zone the batch targeted.
        zone_id: String,
        /// The remote rejection, message verbatim.
        #[source]
        source: ProviderError,
    },

    /// Zone deletion was refused by the remote service.
    #[error("zone deletion failed for {zone_id}: {source}")]
    Destroy {
        /// Zone whose deletion failed.
        zone_id: String,
        /// The remote refusal, message verbatim.
        #[source]
        source: ProviderError,
    },

    /// Any other provider error, passed through unchanged.
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether this is expected behavior (bad input, resource absent) used for
    /// log level selection: `warn` when `true`, `error` otherwise.
    ///
    /// Update this method whenever a variant is added.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidName { .. }
            | Self::DuplicateKey { .. }
            | Self::ConflictingChange { .. }
            | Self::Validation(_)
            | Self::ZoneNotFound(_)
            | Self::Submission { .. }
            | Self::Destroy { .. } => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
