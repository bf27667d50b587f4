use crate::traits::RelationId;

/// Errors that can occur in store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The relation id is not active in this store.
    #[error("unknown relation {0}")]
    UnknownRelation(RelationId),
}

pub type Result<T> = std::result::Result<T, StoreError>;
