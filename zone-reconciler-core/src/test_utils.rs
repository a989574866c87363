//! Test helpers: an in-memory mock of the hosted-zone service boundary.
//!
//! The mock emulates the service semantics the reconciler depends on: default
//! SOA/NS record sets on every zone, atomic change batches, exact-value
//! matching on delete, refusal to delete a non-empty zone, and cursor-based
//! listing. Failures are scriptable per operation, and every boundary call is
//! recorded so tests can assert rollback ordering.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use zone_reconciler_provider::{
    ChangeAction, ChangeBatch, CreateZoneRequest, ListCursor, ProviderError, RecordSet,
    RecordSetPage, RecordType, RemoteZone, Result, ZoneConfig, ZoneProvider,
};

use crate::types::RecordKey;

struct ZoneState {
    zone: RemoteZone,
    records: Vec<RecordSet>,
}

struct MockState {
    zones: HashMap<String, ZoneState>,
    calls: Vec<String>,
    batches: Vec<(String, ChangeBatch)>,
    next_id: u32,
    page_size: usize,
    /// If Some, submit_change_batch fails with this message.
    submit_error: Option<String>,
    /// If Some, update_zone_comment fails with this message.
    comment_error: Option<String>,
    /// If Some, delete_zone fails with this message.
    delete_error: Option<String>,
}

pub struct MockZoneProvider {
    state: RwLock<MockState>,
}

impl MockZoneProvider {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MockState {
                zones: HashMap::new(),
                calls: Vec::new(),
                batches: Vec::new(),
                next_id: 1,
                page_size: 100,
                submit_error: None,
                comment_error: None,
                delete_error: None,
            }),
        }
    }

    /// Default SOA and NS record sets, as the service creates on every zone.
    fn default_records(qualified_name: &str) -> Vec<RecordSet> {
        vec![
            RecordSet::new(
                qualified_name,
                RecordType::Soa,
                900,
                vec!["ns-1.example-dns.org. hostmaster. 1 7200 900 1209600 86400".to_string()],
            ),
            RecordSet::new(
                qualified_name,
                RecordType::Ns,
                172_800,
                vec![
                    "ns-1.example-dns.org.".to_string(),
                    "ns-2.example-dns.net.".to_string(),
                ],
            ),
        ]
    }

    /// Seed a zone directly, bypassing the boundary. Returns the zone id.
    pub async fn seed_zone(&self, bare_name: &str, comment: Option<&str>) -> String {
        let mut state = self.state.write().await;
        let id = format!("/hostedzone/Z{:05}", state.next_id);
        state.next_id += 1;
        let qualified = format!("{bare_name}.");
        state.zones.insert(
            id.clone(),
            ZoneState {
                zone: RemoteZone {
                    id: id.clone(),
                    name: qualified.clone(),
                    config: ZoneConfig {
                        comment: comment.map(str::to_string),
                    },
                },
                records: Self::default_records(&qualified),
            },
        );
        id
    }

    /// Append record sets to a seeded zone.
    pub async fn seed_records(&self, zone_id: &str, records: Vec<RecordSet>) {
        let mut state = self.state.write().await;
        if let Some(zs) = state.zones.get_mut(zone_id) {
            zs.records.extend(records);
        }
    }

    pub async fn set_page_size(&self, page_size: usize) {
        self.state.write().await.page_size = page_size.max(1);
    }

    pub async fn fail_submit(&self, message: Option<String>) {
        self.state.write().await.submit_error = message;
    }

    pub async fn fail_update_comment(&self, message: Option<String>) {
        self.state.write().await.comment_error = message;
    }

    pub async fn fail_delete(&self, message: Option<String>) {
        self.state.write().await.delete_error = message;
    }

    /// Every boundary call made so far, in order.
    pub async fn call_log(&self) -> Vec<String> {
        self.state.read().await.calls.clone()
    }

    /// How many times the named operation was called.
    pub async fn calls_named(&self, name: &str) -> usize {
        self.state
            .read()
            .await
            .calls
            .iter()
            .filter(|c| *c == name)
            .count()
    }

    /// Batches accepted for a zone, in submission order.
    pub async fn submitted_batches(&self, zone_id: &str) -> Vec<ChangeBatch> {
        self.state
            .read()
            .await
            .batches
            .iter()
            .filter(|(z, _)| z == zone_id)
            .map(|(_, b)| b.clone())
            .collect()
    }

    pub async fn zone_exists(&self, zone_id: &str) -> bool {
        self.state.read().await.zones.contains_key(zone_id)
    }

    pub async fn comment_of(&self, zone_id: &str) -> Option<String> {
        self.state
            .read()
            .await
            .zones
            .get(zone_id)
            .and_then(|zs| zs.zone.config.comment.clone())
    }

    pub async fn records_of(&self, zone_id: &str) -> Vec<RecordSet> {
        self.state
            .read()
            .await
            .zones
            .get(zone_id)
            .map(|zs| zs.records.clone())
            .unwrap_or_default()
    }

    fn not_found(zone: &str) -> ProviderError {
        ProviderError::ZoneNotFound {
            provider: "mock".to_string(),
            zone: zone.to_string(),
            raw_message: None,
        }
    }

    fn rejected(zone: &str, message: impl Into<String>) -> ProviderError {
        ProviderError::InvalidChangeBatch {
            provider: "mock".to_string(),
            zone: zone.to_string(),
            raw_message: message.into(),
        }
    }

    /// Exact-match semantics the service applies to DELETE entries.
    fn delete_matches(current: &RecordSet, requested: &RecordSet) -> bool {
        let mut cur: Vec<&str> = current.values.iter().map(String::as_str).collect();
        let mut req: Vec<&str> = requested.values.iter().map(String::as_str).collect();
        cur.sort_unstable();
        req.sort_unstable();
        current.ttl == requested.ttl && cur == req
    }
}

#[async_trait]
impl ZoneProvider for MockZoneProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn create_zone(&self, req: &CreateZoneRequest) -> Result<RemoteZone> {
        let mut state = self.state.write().await;
        state.calls.push("create_zone".to_string());

        let id = format!("/hostedzone/Z{:05}", state.next_id);
        state.next_id += 1;
        let zone = RemoteZone {
            id: id.clone(),
            name: req.name.clone(),
            config: req.config.clone(),
        };
        state.zones.insert(
            id,
            ZoneState {
                zone: zone.clone(),
                records: Self::default_records(&req.name),
            },
        );
        Ok(zone)
    }

    async fn get_zone(&self, zone_id: &str) -> Result<RemoteZone> {
        let mut state = self.state.write().await;
        state.calls.push("get_zone".to_string());
        state
            .zones
            .get(zone_id)
            .map(|zs| zs.zone.clone())
            .ok_or_else(|| Self::not_found(zone_id))
    }

    async fn update_zone_comment(&self, zone_id: &str, comment: Option<&str>) -> Result<()> {
        let mut state = self.state.write().await;
        state.calls.push("update_zone_comment".to_string());

        if let Some(msg) = state.comment_error.clone() {
            return Err(ProviderError::Unknown {
                provider: "mock".to_string(),
                raw_code: None,
                raw_message: msg,
            });
        }
        let zs = state
            .zones
            .get_mut(zone_id)
            .ok_or_else(|| Self::not_found(zone_id))?;
        zs.zone.config.comment = comment.map(str::to_string);
        Ok(())
    }

    async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        let mut state = self.state.write().await;
        state.calls.push("delete_zone".to_string());

        if let Some(msg) = state.delete_error.clone() {
            return Err(ProviderError::Unknown {
                provider: "mock".to_string(),
                raw_code: None,
                raw_message: msg,
            });
        }
        let zs = state
            .zones
            .get(zone_id)
            .ok_or_else(|| Self::not_found(zone_id))?;
        if zs.records.iter().any(|rs| !rs.record_type.is_protected()) {
            return Err(ProviderError::ZoneNotEmpty {
                provider: "mock".to_string(),
                zone: zone_id.to_string(),
                raw_message: Some(
                    "The specified hosted zone contains non-required resource record sets"
                        .to_string(),
                ),
            });
        }
        state.zones.remove(zone_id);
        Ok(())
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&ListCursor>,
    ) -> Result<RecordSetPage> {
        let mut state = self.state.write().await;
        state.calls.push("list_record_sets".to_string());
        let page_size = state.page_size;

        let zs = state
            .zones
            .get(zone_id)
            .ok_or_else(|| Self::not_found(zone_id))?;

        // the cursor names the first record of the requested page
        let start = match cursor {
            Some(c) => {
                let wanted = RecordKey::new(&c.record_name, c.record_type.clone());
                zs.records
                    .iter()
                    .position(|rs| RecordKey::of(rs) == wanted)
                    .unwrap_or(zs.records.len())
            }
            None => 0,
        };
        let end = (start + page_size).min(zs.records.len());
        let next = zs.records.get(end).map(|rs| ListCursor {
            record_name: rs.name.clone(),
            record_type: rs.record_type.clone(),
        });

        Ok(RecordSetPage {
            record_sets: zs.records[start..end].to_vec(),
            next,
        })
    }

    async fn submit_change_batch(&self, zone_id: &str, batch: &ChangeBatch) -> Result<()> {
        let mut state = self.state.write().await;
        state.calls.push("submit_change_batch".to_string());

        if let Some(msg) = state.submit_error.clone() {
            return Err(Self::rejected(zone_id, msg));
        }
        let zs = state
            .zones
            .get(zone_id)
            .ok_or_else(|| Self::not_found(zone_id))?;

        // apply to a working copy; commit only if every entry is valid
        let mut records = zs.records.clone();
        for entry in &batch.changes {
            let key = RecordKey::of(&entry.record_set);
            let position = records.iter().position(|rs| RecordKey::of(rs) == key);
            match entry.action {
                ChangeAction::Create => {
                    if position.is_some() {
                        return Err(Self::rejected(
                            zone_id,
                            format!("Tried to create resource record set [{key}] but it already exists"),
                        ));
                    }
                    records.push(entry.record_set.clone());
                }
                ChangeAction::Upsert => match position {
                    Some(i) => records[i] = entry.record_set.clone(),
                    None => records.push(entry.record_set.clone()),
                },
                ChangeAction::Delete => {
                    let Some(i) = position else {
                        return Err(Self::rejected(
                            zone_id,
                            format!("Tried to delete resource record set [{key}] but it was not found"),
                        ));
                    };
                    if !Self::delete_matches(&records[i], &entry.record_set) {
                        return Err(Self::rejected(
                            zone_id,
                            format!(
                                "Tried to delete resource record set [{key}] but the values provided do not match the current values"
                            ),
                        ));
                    }
                    records.remove(i);
                }
            }
        }

        let zs = state
            .zones
            .get_mut(zone_id)
            .ok_or_else(|| Self::not_found(zone_id))?;
        zs.records = records;
        state.batches.push((zone_id.to_string(), batch.clone()));
        Ok(())
    }
}
