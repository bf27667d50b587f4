use routelink_exchange::{serialize_data, RouteTable, UnitRoute, ROUTE_TABLE_KEY};
use routelink_store::MemoryStore;

use crate::cmd::InitArgs;
use crate::exit::{route_error, store_error, CliError, CliResult, SUCCESS, USAGE};
use crate::state::save_store;

pub fn run(args: InitArgs) -> CliResult<i32> {
    if args.state.exists() && !args.force {
        return Err(CliError::new(
            USAGE,
            format!(
                "state file {} already exists (use --force to overwrite)",
                args.state.display()
            ),
        ));
    }

    let mut store = MemoryStore::new();
    if args.relation || !args.routes.is_empty() {
        let relation = store.add_relation(&args.endpoint);
        if !args.routes.is_empty() {
            let mut table = RouteTable::new();
            for route in &args.routes {
                let (unit, url) = route.split_once('=').ok_or_else(|| {
                    CliError::new(USAGE, format!("invalid --route '{route}', expected UNIT=URL"))
                })?;
                table.insert(
                    unit.to_string(),
                    UnitRoute {
                        url: url.to_string(),
                    },
                );
            }
            let value = serialize_data(&table)
                .map_err(|err| route_error("serializing route table", err))?;
            store
                .inject_peer(relation, ROUTE_TABLE_KEY, value)
                .map_err(|err| store_error("seeding route table", err))?;
        }
    }

    save_store(&args.state, &store)?;
    Ok(SUCCESS)
}
