/// Errors that can occur in route exchange operations.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Publishing requires leadership the caller does not hold.
    #[error("publishing requires leadership")]
    Unauthorized,

    /// No active relation is bound to the endpoint yet.
    #[error("no active relation on endpoint '{0}'")]
    NotReady(String),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Store-level error.
    #[error("store error: {0}")]
    Store(#[from] routelink_store::StoreError),
}

pub type Result<T> = std::result::Result<T, RouteError>;
