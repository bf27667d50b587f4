//! Route relation interface library.
//!
//! routelink wraps the two sides of a router ingress exchange: a requirer
//! that asks for a route on behalf of a unit, and a provider that relays the
//! host's relation-ready signal to whatever drives the router. Relation data
//! lives in an injected store; lifecycle notifications travel over an
//! explicit event bus.
//!
//! # Crate Structure
//!
//! - [`store`] — Injectable key-value store over relation databags
//! - [`events`] — Synchronous pub-sub bus for lifecycle events
//! - [`exchange`] — Provider/requirer roles (behind `exchange` feature)

/// Re-export store types.
pub mod store {
    pub use routelink_store::*;
}

/// Re-export event types.
pub mod events {
    pub use routelink_events::*;
}

/// Re-export exchange types (requires `exchange` feature).
#[cfg(feature = "exchange")]
pub mod exchange {
    pub use routelink_exchange::*;
}
