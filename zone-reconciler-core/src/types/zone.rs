//! Desired and observed zone state.

use serde::{Deserialize, Serialize};
use zone_reconciler_provider::RecordSet;

use super::record::DesiredRecordSet;

/// A zone as declared by the caller for one convergence pass.
///
/// The record-set list is rebuilt fresh for every pass; entries do not outlive
/// the pass that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredZone {
    /// Zone name in bare form, no trailing dot. The reconciler appends the
    /// qualifier when talking to the remote service.
    pub name: String,
    /// Free-text comment, at most 256 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// The declared record sets.
    #[serde(default)]
    pub record_sets: Vec<DesiredRecordSet>,
}

impl DesiredZone {
    /// A zone declaration with no comment and no record sets.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            record_sets: Vec::new(),
        }
    }

    /// Set the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Add desired record sets.
    #[must_use]
    pub fn with_record_sets(mut self, record_sets: Vec<DesiredRecordSet>) -> Self {
        self.record_sets = record_sets;
        self
    }
}

/// The observed state of a remote zone: its configuration plus the full
/// record-set listing, pagination already followed and flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedZone {
    /// Service-assigned zone id.
    pub id: String,
    /// Zone name as the service returns it, trailing dot included.
    pub name: String,
    /// Current zone comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// All live record sets, in service order.
    pub record_sets: Vec<RecordSet>,
}

#[cfg(test)]
mod tests {
    use zone_reconciler_provider::RecordType;

    use super::*;
    use crate::types::DesiredAction;

    #[test]
    fn desired_zone_deserializes_from_front_end_shape() {
        let json = r#"{
            "name": "feegle.com",
            "comment": "The zone stands alone.",
            "recordSets": [
                {
                    "action": "ensure",
                    "recordSet": {
                        "name": "some-api-host.feegle.com",
                        "type": "CNAME",
                        "ttl": 3600,
                        "values": ["some-other-host"]
                    }
                }
            ]
        }"#;

        let zone: DesiredZone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.name, "feegle.com");
        assert_eq!(zone.record_sets.len(), 1);
        assert_eq!(zone.record_sets[0].action, DesiredAction::Ensure);
        assert_eq!(
            zone.record_sets[0].record_set.record_type,
            RecordType::Cname
        );
    }

    #[test]
    fn record_sets_default_to_empty() {
        let zone: DesiredZone = serde_json::from_str(r#"{"name":"feegle.com"}"#).unwrap();
        assert!(zone.record_sets.is_empty());
        assert!(zone.comment.is_none());
    }
}
