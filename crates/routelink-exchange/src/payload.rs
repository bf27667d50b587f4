//! Wire payloads exchanged over the route relation.
//!
//! Requirer → provider, two databag fields on the requirer's side:
//!
//! ```json
//! "ingress": { "model": "cos", "unit": "prometheus/0" }
//! "config":  { "rule": "Host(`foo.bar/{{unit}}`)" }
//! ```
//!
//! Provider → requirer, one field on the router's side:
//!
//! ```json
//! "traefik_route": { "prometheus/0": { "url": "https://foo.bar/cos-prometheus-0" } }
//! ```
//!
//! Outbound values are written as pretty-printed JSON so operators can read
//! the databag directly. Inbound parsing is plain JSON with no schema check;
//! malformed upstream data surfaces as a parse error at read time.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default relation endpoint name.
pub const DEFAULT_ENDPOINT: &str = "traefik_route";

/// Requirer-side field carrying the routing rule.
pub const CONFIG_KEY: &str = "config";
/// Requirer-side field identifying who is asking for the route.
pub const INGRESS_KEY: &str = "ingress";
/// Router-side field carrying the per-unit url table.
pub const ROUTE_TABLE_KEY: &str = "traefik_route";

/// Who is asking: the unit (and its model) that needs ingress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressRequest {
    /// Model the requesting unit runs in.
    pub model: String,
    /// Requesting unit name, e.g. `prometheus/0`.
    pub unit: String,
}

/// Admin-supplied routing rule.
///
/// The rule is an opaque template string, e.g. ``Host(`foo.bar/{{unit}}`)``.
/// Rule syntax is the router's business; nothing here checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub rule: String,
}

/// One entry of the router-published url table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRoute {
    /// Externally reachable url the router proxies to this unit.
    pub url: String,
}

/// Per-unit url table published by the router on its side of the relation.
pub type RouteTable = BTreeMap<String, UnitRoute>;

/// Serialize a databag value as pretty-printed JSON (2-space indent).
pub fn serialize_data<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Parse a databag value. Plain JSON, no schema check.
pub fn deserialize_data<T: DeserializeOwned>(raw: &str) -> Result<T> {
    Ok(serde_json::from_str(raw)?)
}
