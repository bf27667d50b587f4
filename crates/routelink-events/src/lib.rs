//! Synchronous publish-subscribe for relation lifecycle events.
//!
//! The embedding host re-publishes its lifecycle notifications onto an
//! [`EventBus`]; components register callbacks against named event kinds and
//! emit their own kinds in turn. Dispatch is synchronous, on the emitting
//! thread, in registration order. One event is in flight at a time: the
//! host serializes event handling, and this crate assumes the same.

pub mod bus;
pub mod event;

pub use bus::{EventBus, Subscription};
pub use event::{
    is_lifecycle, RelationEvent, RELATION_BROKEN, RELATION_JOINED, RELATION_READY, ROUTE_REQUEST,
};
