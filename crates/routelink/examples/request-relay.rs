//! Minimal end-to-end exchange: provider, requirer, and an in-memory store.
//!
//! Run with:
//!   cargo run --example request-relay

use routelink::events::{EventBus, RelationEvent, ROUTE_REQUEST};
use routelink::exchange::{
    IngressRequest, Leadership, RouteConfig, RouteProvider, RouteRequirer, ROUTE_TABLE_KEY,
};
use routelink::store::MemoryStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MemoryStore::new();
    let relation = store.add_relation("traefik_route");

    // Router side: turn relation-ready into route-request.
    let host = EventBus::new();
    let provider = RouteProvider::new();
    provider.attach(&host);
    provider.events().subscribe(ROUTE_REQUEST, |event| {
        eprintln!(
            "route requested on relation {} (endpoint {})",
            event.relation, event.endpoint
        );
    });

    // The host signals the relation is ready.
    host.emit(&RelationEvent::ready("traefik_route", relation));

    // Requirer side: the leader publishes who wants which route.
    let requirer = RouteRequirer::new();
    requirer.publish(
        &mut store,
        Leadership::Leader,
        &IngressRequest {
            model: "cos".to_string(),
            unit: "prometheus/0".to_string(),
        },
        &RouteConfig {
            rule: "Host(`foo.bar/{{unit}}`)".to_string(),
        },
    )?;

    // The router answers with a per-unit url table on its own side.
    store.inject_peer(
        relation,
        ROUTE_TABLE_KEY,
        r#"{"prometheus/0": {"url": "https://foo.bar/cos-prometheus-0"}}"#,
    )?;

    let url = requirer.proxied_endpoint(&store, "prometheus/0")?;
    println!("proxied endpoint: {}", url.as_deref().unwrap_or("<none>"));

    Ok(())
}
