use std::path::PathBuf;

use clap::{Args, Subcommand};
use routelink_exchange::DEFAULT_ENDPOINT;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod endpoint;
pub mod init;
pub mod inspect;
pub mod publish;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a state file, optionally seeding a relation.
    Init(InitArgs),
    /// Publish the ingress request and routing rule (leader only).
    Publish(PublishArgs),
    /// Print the url the router proxies to a unit.
    Endpoint(EndpointArgs),
    /// Show relations and databag contents.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Init(args) => init::run(args),
        Command::Publish(args) => publish::run(args, format),
        Command::Endpoint(args) => endpoint::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// State file to create.
    pub state: PathBuf,
    /// Seed one active relation on the endpoint.
    #[arg(long)]
    pub relation: bool,
    /// Relation endpoint name.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Seed a router-published url, `unit=url`. Repeatable; implies --relation.
    #[arg(long = "route", value_name = "UNIT=URL")]
    pub routes: Vec<String>,
    /// Overwrite an existing state file.
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// State file to operate on.
    pub state: PathBuf,
    /// Relation endpoint name.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Model the requesting unit runs in.
    #[arg(long)]
    pub model: String,
    /// Requesting unit name, e.g. prometheus/0.
    #[arg(long)]
    pub unit: String,
    /// Routing rule template.
    #[arg(long)]
    pub rule: String,
    /// Run the publish as a non-leader replica.
    #[arg(long)]
    pub follower: bool,
}

#[derive(Args, Debug)]
pub struct EndpointArgs {
    /// State file to read.
    pub state: PathBuf,
    /// Relation endpoint name.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Unit to look up.
    #[arg(long)]
    pub unit: String,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// State file to read.
    pub state: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build information.
    #[arg(long)]
    pub extended: bool,
}
