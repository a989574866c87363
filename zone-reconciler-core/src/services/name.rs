//! Domain and record name normalization.
//!
//! The remote service stores every name fully qualified (trailing dot). The
//! caller must supply the bare form: input that already carries the dot is
//! rejected as ambiguous rather than silently unified, so two visually
//! distinct declarations can never collide on one remote zone. The qualifier
//! is appended here, only when building remote requests or comparing against
//! remote-returned names.

use crate::error::{CoreError, CoreResult};

/// Normalize a name for identity comparison: lowercase, trailing dot stripped.
#[must_use]
pub fn key_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Append the trailing qualifier if not already present.
#[must_use]
pub fn qualify(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Strip the trailing qualifier if present.
#[must_use]
pub fn unqualify(name: &str) -> &str {
    name.trim_end_matches('.')
}

/// Whether two names refer to the same domain, ignoring case and qualifier.
#[must_use]
pub fn names_equal(a: &str, b: &str) -> bool {
    key_name(a) == key_name(b)
}

/// Validate a user-supplied zone name.
///
/// The name must be non-empty and bare: the service appends the qualifier
/// itself, and accepting both forms would let `"example.com"` and
/// `"example.com."` silently manage the same remote zone.
pub fn validate_zone_name(name: &str) -> CoreResult<()> {
    if name.is_empty() {
        return Err(CoreError::InvalidName {
            name: name.to_string(),
            reason: "zone name cannot be empty".to_string(),
        });
    }
    if name.ends_with('.') {
        return Err(CoreError::InvalidName {
            name: name.to_string(),
            reason: "zone name cannot end with a dot".to_string(),
        });
    }
    Ok(())
}

/// Validate a user-supplied record (RR) name.
///
/// Must be bare: the service rejects a doubly-qualified name outright
/// ("DomainLabelEmpty"), so catch it before any remote call.
pub fn validate_record_name(name: &str) -> CoreResult<()> {
    if name.is_empty() {
        return Err(CoreError::InvalidName {
            name: name.to_string(),
            reason: "record name cannot be empty".to_string(),
        });
    }
    if name.ends_with('.') {
        return Err(CoreError::InvalidName {
            name: name.to_string(),
            reason: "record name cannot end with a dot".to_string(),
        });
    }
    Ok(())
}
