use crate::cmd::InspectArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_store, OutputFormat};
use crate::state::load_store;

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let store = load_store(&args.state)?;
    print_store(&store, format)?;
    Ok(SUCCESS)
}
