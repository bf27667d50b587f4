mod cmd;
mod exit;
mod logging;
mod output;
mod state;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "routelink", version, about = "Route relation exchange CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_publish_subcommand() {
        let cli = Cli::try_parse_from([
            "routelink",
            "publish",
            "/tmp/state.json",
            "--model",
            "cos",
            "--unit",
            "prometheus/0",
            "--rule",
            "Host(`foo.bar`)",
        ])
        .expect("publish args should parse");

        assert!(matches!(cli.command, Command::Publish(_)));
    }

    #[test]
    fn publish_requires_rule() {
        let err = Cli::try_parse_from([
            "routelink",
            "publish",
            "/tmp/state.json",
            "--model",
            "cos",
            "--unit",
            "prometheus/0",
        ])
        .expect_err("missing --rule should fail");

        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn parses_endpoint_subcommand_with_default_endpoint() {
        let cli = Cli::try_parse_from([
            "routelink",
            "endpoint",
            "/tmp/state.json",
            "--unit",
            "prometheus/0",
        ])
        .expect("endpoint args should parse");

        match cli.command {
            Command::Endpoint(args) => assert_eq!(args.endpoint, "traefik_route"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_repeated_routes_on_init() {
        let cli = Cli::try_parse_from([
            "routelink",
            "init",
            "/tmp/state.json",
            "--route",
            "a/0=https://a",
            "--route",
            "b/0=https://b",
        ])
        .expect("init args should parse");

        match cli.command {
            Command::Init(args) => assert_eq!(args.routes.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
