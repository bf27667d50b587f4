use routelink_events::{EventBus, RelationEvent, Subscription, RELATION_READY};
use tracing::debug;

use crate::payload::DEFAULT_ENDPOINT;

/// Provider side of the route relation.
///
/// Fronts the router. The only job here is to turn the host's relation-ready
/// notification into a route-request event on the provider's own bus, where
/// the glue code that configures the router picks it up.
pub struct RouteProvider {
    endpoint: String,
    events: EventBus,
}

impl RouteProvider {
    /// Create a provider bound to the default endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a provider bound to a named endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            events: EventBus::new(),
        }
    }

    /// Endpoint this provider is bound to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Bus on which route-request events are emitted.
    pub fn events(&self) -> EventBus {
        self.events.clone()
    }

    /// Subscribe to the host bus and relay ready events as route requests.
    ///
    /// Each matching ready event produces exactly one route-request event
    /// carrying the same relation id, dispatched synchronously from inside
    /// the ready dispatch. Ready events for other endpoints are ignored.
    ///
    /// Returns the host-bus subscription so callers can detach the provider.
    pub fn attach(&self, host: &EventBus) -> Subscription {
        let endpoint = self.endpoint.clone();
        let events = self.events.clone();
        host.subscribe(RELATION_READY, move |event| {
            if event.endpoint != endpoint {
                return;
            }
            debug!(
                endpoint = %event.endpoint,
                relation = %event.relation,
                "relaying relation-ready as route-request"
            );
            events.emit(&RelationEvent::route_request(
                event.endpoint.clone(),
                event.relation,
            ));
        })
    }
}

impl Default for RouteProvider {
    fn default() -> Self {
        Self::new()
    }
}
