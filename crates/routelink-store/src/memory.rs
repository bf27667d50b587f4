use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::traits::{RelationId, RelationStore, Side};

/// In-process relation store.
///
/// Backs tests, examples, and the CLI state file. An embedding host injects
/// its own [`RelationStore`] implementation over the real databags instead.
///
/// Serializes to a plain JSON document, so a store can round-trip through a
/// state file on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    next_id: u64,
    relations: Vec<RelationRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RelationRecord {
    id: RelationId,
    endpoint: String,
    local: BTreeMap<String, String>,
    peer: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an active relation on the named endpoint.
    ///
    /// Ids are handed out from a monotonic counter and never reused, even
    /// after [`remove_relation`](Self::remove_relation).
    pub fn add_relation(&mut self, endpoint: impl Into<String>) -> RelationId {
        self.next_id += 1;
        let id = RelationId(self.next_id);
        let endpoint = endpoint.into();
        debug!(relation = %id, endpoint = %endpoint, "relation added");
        self.relations.push(RelationRecord {
            id,
            endpoint,
            local: BTreeMap::new(),
            peer: BTreeMap::new(),
        });
        id
    }

    /// Drop a relation and both halves of its databag.
    ///
    /// Returns false if the relation was not active.
    pub fn remove_relation(&mut self, relation: RelationId) -> bool {
        let before = self.relations.len();
        self.relations.retain(|record| record.id != relation);
        let removed = self.relations.len() != before;
        if removed {
            debug!(relation = %relation, "relation removed");
        }
        removed
    }

    /// Write into the peer half, standing in for the remote owner.
    ///
    /// Harness surface only: lets tests and state files model data the peer
    /// published on its own side. Not part of [`RelationStore`].
    pub fn inject_peer(
        &mut self,
        relation: RelationId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        self.record_mut(relation)?.peer.insert(key.into(), value.into());
        Ok(())
    }

    /// All active relation ids, in insertion order.
    pub fn relation_ids(&self) -> Vec<RelationId> {
        self.relations.iter().map(|record| record.id).collect()
    }

    /// Endpoint a relation is bound to.
    pub fn endpoint_of(&self, relation: RelationId) -> Result<&str> {
        Ok(&self.record(relation)?.endpoint)
    }

    /// Distinct endpoint names with at least one active relation.
    pub fn endpoints(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in &self.relations {
            if !names.contains(&record.endpoint) {
                names.push(record.endpoint.clone());
            }
        }
        names
    }

    /// All fields of one databag half, sorted by key.
    pub fn entries(&self, relation: RelationId, side: Side) -> Result<Vec<(String, String)>> {
        let record = self.record(relation)?;
        let bag = match side {
            Side::Local => &record.local,
            Side::Peer => &record.peer,
        };
        Ok(bag
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    /// Parse a store from its JSON form.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Serialize the store as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn record(&self, relation: RelationId) -> Result<&RelationRecord> {
        self.relations
            .iter()
            .find(|record| record.id == relation)
            .ok_or(StoreError::UnknownRelation(relation))
    }

    fn record_mut(&mut self, relation: RelationId) -> Result<&mut RelationRecord> {
        self.relations
            .iter_mut()
            .find(|record| record.id == relation)
            .ok_or(StoreError::UnknownRelation(relation))
    }
}

impl RelationStore for MemoryStore {
    fn relations(&self, endpoint: &str) -> Vec<RelationId> {
        self.relations
            .iter()
            .filter(|record| record.endpoint == endpoint)
            .map(|record| record.id)
            .collect()
    }

    fn read(&self, relation: RelationId, side: Side, key: &str) -> Result<Option<String>> {
        let record = self.record(relation)?;
        let bag = match side {
            Side::Local => &record.local,
            Side::Peer => &record.peer,
        };
        Ok(bag.get(key).cloned())
    }

    fn write(&mut self, relation: RelationId, key: &str, value: String) -> Result<()> {
        self.record_mut(relation)?.local.insert(key.to_string(), value);
        Ok(())
    }
}
