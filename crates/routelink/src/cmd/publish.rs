use routelink_exchange::{IngressRequest, Leadership, RouteConfig, RouteRequirer};

use crate::cmd::PublishArgs;
use crate::exit::{route_error, CliResult, SUCCESS};
use crate::output::{print_publish, OutputFormat};
use crate::state::{load_store, save_store};

pub fn run(args: PublishArgs, format: OutputFormat) -> CliResult<i32> {
    let mut store = load_store(&args.state)?;
    let requirer = RouteRequirer::with_endpoint(&args.endpoint);
    let leadership = Leadership::from_is_leader(!args.follower);
    let ingress = IngressRequest {
        model: args.model,
        unit: args.unit,
    };
    let config = RouteConfig { rule: args.rule };

    requirer
        .publish(&mut store, leadership, &ingress, &config)
        .map_err(|err| route_error("publishing route request", err))?;
    save_store(&args.state, &store)?;

    if let Some(relation) = requirer.relation(&store) {
        print_publish(&args.endpoint, relation, format);
    }
    Ok(SUCCESS)
}
