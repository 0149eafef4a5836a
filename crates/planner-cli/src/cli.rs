//! Command tree

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

fn select_arg() -> Arg {
    Arg::new("select")
        .long("select")
        .short('s')
        .value_name("IDS")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Scenario ids to select, comma separated")
}

/// Build the `patch-planner` command
#[must_use]
pub fn command() -> Command {
    Command::new("patch-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Combine land management scenarios and see their effect on invasive plant risk")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Load scenarios from a JSON, YAML or TOML file instead of the built-in table"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("TOML planner configuration"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Raise log level (-v info, -vv debug); RUST_LOG overrides"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Log line format on stderr"),
        )
        .subcommand(Command::new("scenarios").about("List catalog scenarios"))
        .subcommand(Command::new("presets").about("List preset bundles"))
        .subcommand(
            Command::new("plan")
                .about("Build a plan and show combined risk, cost and recommendations")
                .arg(
                    Arg::new("preset")
                        .long("preset")
                        .short('p')
                        .value_name("ID")
                        .help("Start from a preset bundle"),
                )
                .arg(select_arg()),
        )
        .subcommand(
            Command::new("recommend")
                .about("Suggest scenarios to add to a selection")
                .arg(select_arg())
                .arg(
                    Arg::new("explain")
                        .long("explain")
                        .action(ArgAction::SetTrue)
                        .help("Show the rule behind each suggestion"),
                ),
        )
        .subcommand(
            Command::new("meter")
                .about("Classify a raw risk percentage")
                .arg(
                    Arg::new("risk")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64))
                        .help("Signed aggregate risk percentage"),
                ),
        )
        .subcommand(Command::new("schema").about("Print the catalog JSON schema"))
}
