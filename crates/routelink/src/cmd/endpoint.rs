use routelink_exchange::RouteRequirer;

use crate::cmd::EndpointArgs;
use crate::exit::{route_error, CliError, CliResult, FAILURE, SUCCESS};
use crate::output::{print_endpoint, OutputFormat};
use crate::state::load_store;

pub fn run(args: EndpointArgs, format: OutputFormat) -> CliResult<i32> {
    let store = load_store(&args.state)?;
    let requirer = RouteRequirer::with_endpoint(&args.endpoint);
    let url = requirer
        .proxied_endpoint(&store, &args.unit)
        .map_err(|err| route_error("reading proxied endpoint", err))?;

    match url {
        Some(url) => {
            print_endpoint(&args.unit, &url, format);
            Ok(SUCCESS)
        }
        None => Err(CliError::new(
            FAILURE,
            format!(
                "no url published for unit '{}' on endpoint '{}'",
                args.unit, args.endpoint
            ),
        )),
    }
}
