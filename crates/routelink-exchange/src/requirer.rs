use routelink_store::{RelationId, RelationStore, Side};
use tracing::{debug, warn};

use crate::error::{Result, RouteError};
use crate::leadership::Leadership;
use crate::payload::{
    deserialize_data, serialize_data, IngressRequest, RouteConfig, RouteTable, CONFIG_KEY,
    DEFAULT_ENDPOINT, INGRESS_KEY, ROUTE_TABLE_KEY,
};

/// Requirer side of the route relation.
///
/// Holds no state beyond the endpoint name; every operation takes the store
/// and the caller's leadership explicitly. No validation happens here: the
/// requirer trusts upstream to have validated the ingress data and the admin
/// to have validated the rule.
pub struct RouteRequirer {
    endpoint: String,
}

impl RouteRequirer {
    /// Create a requirer bound to the default endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a requirer bound to a named endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint this requirer is bound to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The active relation on this endpoint, if any.
    ///
    /// At most one relation is expected here. If the host reports more, the
    /// first in host order is used and the surplus is logged.
    pub fn relation(&self, store: &dyn RelationStore) -> Option<RelationId> {
        let relations = store.relations(&self.endpoint);
        if relations.len() > 1 {
            warn!(
                endpoint = %self.endpoint,
                surplus = relations.len() - 1,
                "multiple relations bound to endpoint, using the first"
            );
        }
        relations.first().copied()
    }

    /// Url the router proxies to `unit`, if published yet.
    ///
    /// Reads the router-side url table. An absent or malformed table
    /// surfaces as a JSON parse error; an absent relation, or a unit the
    /// table does not mention, returns `Ok(None)`.
    pub fn proxied_endpoint(
        &self,
        store: &dyn RelationStore,
        unit: &str,
    ) -> Result<Option<String>> {
        let Some(relation) = self.relation(store) else {
            return Ok(None);
        };
        let raw = store
            .read(relation, Side::Peer, ROUTE_TABLE_KEY)?
            .unwrap_or_default();
        let table: RouteTable = deserialize_data(&raw)?;
        Ok(table.get(unit).map(|route| route.url.clone()))
    }

    /// Publish the ingress request and routing rule on the requirer's side.
    ///
    /// Leader-only: a follower gets [`RouteError::Unauthorized`] before
    /// anything is written. Both fields are serialized up front, so a
    /// serialization failure also writes nothing.
    pub fn publish(
        &self,
        store: &mut dyn RelationStore,
        leadership: Leadership,
        ingress: &IngressRequest,
        config: &RouteConfig,
    ) -> Result<()> {
        if !leadership.is_leader() {
            return Err(RouteError::Unauthorized);
        }
        let relation = self
            .relation(store)
            .ok_or_else(|| RouteError::NotReady(self.endpoint.clone()))?;

        let config_json = serialize_data(config)?;
        let ingress_json = serialize_data(ingress)?;
        store.write(relation, CONFIG_KEY, config_json)?;
        store.write(relation, INGRESS_KEY, ingress_json)?;

        debug!(
            endpoint = %self.endpoint,
            relation = %relation,
            unit = %ingress.unit,
            "published route request"
        );
        Ok(())
    }
}

impl Default for RouteRequirer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use routelink_store::MemoryStore;

    use super::*;

    fn sample_ingress() -> IngressRequest {
        IngressRequest {
            model: "cos".to_string(),
            unit: "prometheus/0".to_string(),
        }
    }

    fn sample_config() -> RouteConfig {
        RouteConfig {
            rule: "Host(`foo.bar/{{unit}}`)".to_string(),
        }
    }

    #[test]
    fn relation_is_none_without_relations() {
        let store = MemoryStore::new();
        let requirer = RouteRequirer::new();
        assert_eq!(requirer.relation(&store), None);
    }

    #[test]
    fn relation_is_first_when_several_exist() {
        let mut store = MemoryStore::new();
        let requirer = RouteRequirer::new();
        let first = store.add_relation(DEFAULT_ENDPOINT);
        let _second = store.add_relation(DEFAULT_ENDPOINT);

        assert_eq!(requirer.relation(&store), Some(first));
    }

    #[test]
    fn relation_ignores_other_endpoints() {
        let mut store = MemoryStore::new();
        let requirer = RouteRequirer::with_endpoint("custom-route");
        store.add_relation(DEFAULT_ENDPOINT);
        let own = store.add_relation("custom-route");

        assert_eq!(requirer.relation(&store), Some(own));
    }

    #[test]
    fn proxied_endpoint_returns_published_url() {
        let mut store = MemoryStore::new();
        let requirer = RouteRequirer::new();
        let relation = store.add_relation(DEFAULT_ENDPOINT);
        store
            .inject_peer(
                relation,
                ROUTE_TABLE_KEY,
                "{\n  \"prometheus/0\": {\n    \"url\": \"https://foo.bar/p0\"\n  }\n}",
            )
            .expect("inject should succeed");

        let url = requirer
            .proxied_endpoint(&store, "prometheus/0")
            .expect("read should succeed");
        assert_eq!(url.as_deref(), Some("https://foo.bar/p0"));
    }

    #[test]
    fn proxied_endpoint_is_none_for_unlisted_unit() {
        let mut store = MemoryStore::new();
        let requirer = RouteRequirer::new();
        let relation = store.add_relation(DEFAULT_ENDPOINT);
        store
            .inject_peer(relation, ROUTE_TABLE_KEY, "{\"other/0\": {\"url\": \"u\"}}")
            .expect("inject should succeed");

        let url = requirer
            .proxied_endpoint(&store, "prometheus/0")
            .expect("read should succeed");
        assert_eq!(url, None);
    }

    #[test]
    fn proxied_endpoint_is_none_without_relation() {
        let store = MemoryStore::new();
        let requirer = RouteRequirer::new();
        let url = requirer
            .proxied_endpoint(&store, "prometheus/0")
            .expect("read should succeed");
        assert_eq!(url, None);
    }

    #[test]
    fn missing_route_table_surfaces_as_json_error() {
        let mut store = MemoryStore::new();
        let requirer = RouteRequirer::new();
        store.add_relation(DEFAULT_ENDPOINT);

        let result = requirer.proxied_endpoint(&store, "prometheus/0");
        assert!(matches!(result, Err(RouteError::Json(_))));
    }

    #[test]
    fn malformed_route_table_surfaces_as_json_error() {
        let mut store = MemoryStore::new();
        let requirer = RouteRequirer::new();
        let relation = store.add_relation(DEFAULT_ENDPOINT);
        store
            .inject_peer(relation, ROUTE_TABLE_KEY, "{not-json")
            .expect("inject should succeed");

        let result = requirer.proxied_endpoint(&store, "prometheus/0");
        assert!(matches!(result, Err(RouteError::Json(_))));
    }

    #[test]
    fn follower_publish_is_rejected_and_writes_nothing() {
        let mut store = MemoryStore::new();
        let requirer = RouteRequirer::new();
        let relation = store.add_relation(DEFAULT_ENDPOINT);

        let result = requirer.publish(
            &mut store,
            Leadership::Follower,
            &sample_ingress(),
            &sample_config(),
        );
        assert!(matches!(result, Err(RouteError::Unauthorized)));
        assert!(store
            .entries(relation, Side::Local)
            .expect("entries should succeed")
            .is_empty());
    }

    #[test]
    fn leader_publish_writes_exactly_config_and_ingress() {
        let mut store = MemoryStore::new();
        let requirer = RouteRequirer::new();
        let relation = store.add_relation(DEFAULT_ENDPOINT);
        let ingress = sample_ingress();
        let config = sample_config();

        requirer
            .publish(&mut store, Leadership::Leader, &ingress, &config)
            .expect("leader publish should succeed");

        let entries = store
            .entries(relation, Side::Local)
            .expect("entries should succeed");
        let keys: Vec<&str> = entries.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec![CONFIG_KEY, INGRESS_KEY]);

        let raw_config = store
            .read(relation, Side::Local, CONFIG_KEY)
            .expect("read should succeed")
            .expect("config should be present");
        let parsed_config: RouteConfig =
            deserialize_data(&raw_config).expect("config should parse");
        assert_eq!(parsed_config, config);

        let raw_ingress = store
            .read(relation, Side::Local, INGRESS_KEY)
            .expect("read should succeed")
            .expect("ingress should be present");
        let parsed_ingress: IngressRequest =
            deserialize_data(&raw_ingress).expect("ingress should parse");
        assert_eq!(parsed_ingress, ingress);

        // Written form is the pretty-printed one.
        assert!(raw_config.contains("{\n  \"rule\""));
    }

    #[test]
    fn publish_without_relation_is_not_ready() {
        let mut store = MemoryStore::new();
        let requirer = RouteRequirer::with_endpoint("custom-route");

        let result = requirer.publish(
            &mut store,
            Leadership::Leader,
            &sample_ingress(),
            &sample_config(),
        );
        assert!(matches!(
            result,
            Err(RouteError::NotReady(endpoint)) if endpoint == "custom-route"
        ));
    }

    #[test]
    fn republish_overwrites_previous_values() {
        let mut store = MemoryStore::new();
        let requirer = RouteRequirer::new();
        let relation = store.add_relation(DEFAULT_ENDPOINT);

        requirer
            .publish(
                &mut store,
                Leadership::Leader,
                &sample_ingress(),
                &sample_config(),
            )
            .expect("first publish should succeed");

        let updated = RouteConfig {
            rule: "Host(`new.example`)".to_string(),
        };
        requirer
            .publish(&mut store, Leadership::Leader, &sample_ingress(), &updated)
            .expect("second publish should succeed");

        let raw = store
            .read(relation, Side::Local, CONFIG_KEY)
            .expect("read should succeed")
            .expect("config should be present");
        let parsed: RouteConfig = deserialize_data(&raw).expect("config should parse");
        assert_eq!(parsed, updated);
    }
}
