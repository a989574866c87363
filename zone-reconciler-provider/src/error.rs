use serde::{Deserialize, Serialize};

/// Unified error type for all hosted-zone service operations.
///
/// Each variant includes a `provider` field identifying which backend produced
/// the error. Variants that originate remotely carry the service's message in
/// `raw_message` untouched, so callers can surface it verbatim.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — API rate limit exceeded
///
/// [`retry::with_retry`](crate::retry::with_retry) retries these with
/// exponential backoff; everything else propagates immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    ///
    /// This is a transient error and is safe to retry.
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    ///
    /// This is a transient error and is safe to retry.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    ///
    /// This is a transient error; the request should succeed after waiting.
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// The specified hosted zone was not found.
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone id or name that was not found.
        zone: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// A hosted zone with this name and caller reference was already created.
    ///
    /// The remote service uses the caller reference to detect accidental
    /// double submission of the same create request.
    ZoneAlreadyExists {
        /// Provider that produced the error.
        provider: String,
        /// Zone name that collided.
        zone: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// Zone deletion was refused because non-protected record sets remain.
    ZoneNotEmpty {
        /// Provider that produced the error.
        provider: String,
        /// Zone id whose deletion was refused.
        zone: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// A change batch was rejected as a whole.
    ///
    /// The remote transaction model applies all entries or none, so this is
    /// the only failure shape a batch submission can have. Covers value
    /// mismatches on delete, conflicting records, and malformed entries.
    InvalidChangeBatch {
        /// Provider that produced the error.
        provider: String,
        /// Zone id the batch targeted.
        zone: String,
        /// Original error message from the service, verbatim.
        raw_message: String,
    },

    /// A request parameter is invalid (bad TTL, malformed name, etc.).
    InvalidInput {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the service's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the service.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether this error represents a transient condition worth retrying.
    ///
    /// Business errors (zone missing, batch rejected) never become true on
    /// retry and must propagate immediately.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    /// Whether this is expected behavior (user input, resource absent) rather
    /// than an operational fault, used for log level selection.
    ///
    /// Log at `warn` when this returns `true`, at `error` otherwise.
    /// Update this method whenever a variant is added.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ZoneNotFound { .. }
                | Self::ZoneAlreadyExists { .. }
                | Self::ZoneNotEmpty { .. }
                | Self::InvalidChangeBatch { .. }
                | Self::InvalidInput { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::ZoneNotFound {
                provider,
                zone,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Zone '{zone}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Zone '{zone}' not found")
                }
            }
            Self::ZoneAlreadyExists {
                provider,
                zone,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Zone '{zone}' already exists: {msg}")
                } else {
                    write!(f, "[{provider}] Zone '{zone}' already exists")
                }
            }
            Self::ZoneNotEmpty {
                provider,
                zone,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Zone '{zone}' is not empty: {msg}")
                } else {
                    write!(f, "[{provider}] Zone '{zone}' is not empty")
                }
            }
            Self::InvalidChangeBatch {
                provider,
                zone,
                raw_message,
            } => {
                write!(
                    f,
                    "[{provider}] Change batch rejected for zone '{zone}': {raw_message}"
                )
            }
            Self::InvalidInput {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
