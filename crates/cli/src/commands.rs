//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};
use neodb_executor::{EntityKind, OutputFormat, CONFIG_FILE_NAME};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("neodb")
        .about("Search Near Earth Object close approaches")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file path (default: neodb.toml)")
                .default_value(CONFIG_FILE_NAME)
                .global(true),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .help("NEO data CSV, overrides data_file from the config")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_search())
        .subcommand(build_lookup())
        .subcommand(build_info())
        .subcommand(build_setup())
}

// =========================================================================
// Search
// =========================================================================

fn build_search() -> Command {
    Command::new("search")
        .about("Search close approaches by date, with optional filters")
        .arg(
            Arg::new("return-object")
                .long("return-object")
                .help("Entity to return")
                .value_parser(EntityKind::ALL.map(|kind| kind.name()))
                .default_value(EntityKind::Neo.name()),
        )
        .arg(
            Arg::new("date")
                .long("date")
                .help("Exact close approach date (YYYY-MM-DD)")
                .conflicts_with_all(["start-date", "end-date"]),
        )
        .arg(
            Arg::new("start-date")
                .long("start-date")
                .help("Inclusive range start (YYYY-MM-DD)"),
        )
        .arg(
            Arg::new("end-date")
                .long("end-date")
                .help("Inclusive range end (YYYY-MM-DD)"),
        )
        .arg(
            Arg::new("number")
                .long("number")
                .short('n')
                .help("Maximum number of results (default from config)"),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .short('f')
                .help("Filter as field:op:value, e.g. distance:<:5000000 (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Where results go")
                .value_parser(OutputFormat::names())
                .default_value(OutputFormat::Display.name()),
        )
}

// =========================================================================
// Store
// =========================================================================

fn build_lookup() -> Command {
    Command::new("lookup")
        .about("Look up a NEO by name")
        .arg(Arg::new("name").required(true).help("NEO name"))
}

fn build_info() -> Command {
    Command::new("info").about("Show record store statistics")
}

// =========================================================================
// Setup
// =========================================================================

fn build_setup() -> Command {
    Command::new("setup").about("Write a default neodb.toml if none exists")
}
