use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use routelink_exchange::{CONFIG_KEY, INGRESS_KEY};
use routelink_store::{MemoryStore, RelationId, Side};
use serde::Serialize;

use crate::exit::{store_error, CliResult};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct EndpointOutput<'a> {
    unit: &'a str,
    url: &'a str,
}

pub fn print_endpoint(unit: &str, url: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = EndpointOutput { unit, url };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["UNIT", "URL"])
                .add_row(vec![unit, url]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("unit={unit} url={url}");
        }
    }
}

#[derive(Serialize)]
struct PublishOutput<'a> {
    endpoint: &'a str,
    relation: u64,
    keys: Vec<&'a str>,
}

pub fn print_publish(endpoint: &str, relation: RelationId, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = PublishOutput {
                endpoint,
                relation: relation.0,
                keys: vec![CONFIG_KEY, INGRESS_KEY],
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ENDPOINT", "RELATION", "KEYS"])
                .add_row(vec![
                    endpoint.to_string(),
                    relation.to_string(),
                    format!("{CONFIG_KEY}, {INGRESS_KEY}"),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("published {CONFIG_KEY} and {INGRESS_KEY} on relation {relation} (endpoint {endpoint})");
        }
    }
}

pub fn print_store(store: &MemoryStore, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                store
                    .to_json_pretty()
                    .map_err(|err| crate::exit::json_error("serializing store", err))?
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["RELATION", "ENDPOINT", "SIDE", "KEY", "VALUE"]);
            for (relation, endpoint, side, key, value) in flatten_entries(store)? {
                table.add_row(vec![
                    relation.to_string(),
                    endpoint,
                    side.to_string(),
                    key,
                    value,
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let rows = flatten_entries(store)?;
            if rows.is_empty() {
                println!("no relation data");
            }
            for (relation, endpoint, side, key, value) in rows {
                println!("relation={relation} endpoint={endpoint} side={side} key={key} value={value}");
            }
        }
    }
    Ok(())
}

type EntryRow = (RelationId, String, &'static str, String, String);

fn flatten_entries(store: &MemoryStore) -> CliResult<Vec<EntryRow>> {
    let mut rows = Vec::new();
    for relation in store.relation_ids() {
        let endpoint = store
            .endpoint_of(relation)
            .map_err(|err| store_error("reading store", err))?
            .to_string();
        for (side, side_name) in [(Side::Local, "local"), (Side::Peer, "peer")] {
            let entries = store
                .entries(relation, side)
                .map_err(|err| store_error("reading store", err))?;
            for (key, value) in entries {
                rows.push((relation, endpoint.clone(), side_name, key, value));
            }
        }
    }
    Ok(rows)
}
