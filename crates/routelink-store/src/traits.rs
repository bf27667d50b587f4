use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identity of one host-managed relation.
///
/// Opaque to this library; assigned by whatever owns the store. Ids are
/// never reused within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationId(pub u64);

impl fmt::Display for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which half of a relation's databag a read addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The caller's own half. Readable and writable.
    Local,
    /// The remote side's half. Read-only from here.
    Peer,
}

/// Keyed access to relation databags.
///
/// Reads address either half of a relation. Writes land in the caller's own
/// half only: the trait has no peer-side write, so the remote owner stays
/// the single writer for its half.
pub trait RelationStore {
    /// Ids of active relations bound to the named endpoint, in host order.
    fn relations(&self, endpoint: &str) -> Vec<RelationId>;

    /// Look up a databag field. `Ok(None)` when the key is absent.
    fn read(&self, relation: RelationId, side: Side, key: &str) -> Result<Option<String>>;

    /// Store a field into the caller's own half of the databag.
    fn write(&mut self, relation: RelationId, key: &str, value: String) -> Result<()>;
}
