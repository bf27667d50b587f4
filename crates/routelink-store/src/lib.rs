//! Relation databag store abstraction.
//!
//! A relation is a host-managed channel between two components. Each side
//! owns one half of the relation's key-value databag: readable by both
//! sides, writable only by its owner.
//!
//! This is the lowest layer of routelink. The roles in `routelink-exchange`
//! take a [`RelationStore`] by reference instead of reaching into ambient
//! host state, so the single-writer rule lives in the interface: the trait
//! has no operation that mutates the peer's half.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{RelationId, RelationStore, Side};
