//! Provider/requirer roles for the route relation exchange.
//!
//! Two components cooperate over one relation: a requirer in need of ingress
//! (or a proxy thereof) publishes who is asking and which routing rule to
//! apply; a provider fronting the router relays the host's relation-ready
//! signal to the glue code that drives the router.
//!
//! This is a thin interface layer. It owns no protocol state machine and
//! performs no validation: upstream validates the ingress data, the admin
//! validates the rule, and the router consumes both.

pub mod error;
pub mod leadership;
pub mod payload;
pub mod provider;
pub mod requirer;

pub use error::{Result, RouteError};
pub use leadership::Leadership;
pub use payload::{
    deserialize_data, serialize_data, IngressRequest, RouteConfig, RouteTable, UnitRoute,
    CONFIG_KEY, DEFAULT_ENDPOINT, INGRESS_KEY, ROUTE_TABLE_KEY,
};
pub use provider::RouteProvider;
pub use requirer::RouteRequirer;
