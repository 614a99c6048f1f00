//! ArgMatches → CliAction conversion.
//!
//! Dates are checked here, before any data is loaded, so a typo fails
//! fast with a usage-style message. Everything else about the query
//! (return object, number, filters) is validated by the query builder.

use chrono::NaiveDate;
use clap::ArgMatches;
use neodb_executor::{Command, OutputFormat, QueryParams};

/// Date format accepted on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The result of parsing user input.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    /// Write the default config file; needs no data.
    Setup,
    /// A command to execute, and where its output goes.
    Execute {
        command: Command,
        output: OutputFormat,
    },
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "setup" => Ok(CliAction::Setup),
        "search" => parse_search(sub_matches),
        "lookup" => Ok(display(Command::Lookup {
            name: required(sub_matches, "name")?,
        })),
        "info" => Ok(display(Command::Info)),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn display(command: Command) -> CliAction {
    CliAction::Execute {
        command,
        output: OutputFormat::Display,
    }
}

fn required(matches: &ArgMatches, id: &str) -> Result<String, String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", id))
}

/// Check that `value` is a calendar date in `YYYY-MM-DD` form.
pub fn validate_date(flag: &str, value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|_| value.to_string())
        .map_err(|e| format!("Invalid --{} '{}' (expected YYYY-MM-DD): {}", flag, value, e))
}

// =========================================================================
// Search
// =========================================================================

fn parse_search(matches: &ArgMatches) -> Result<CliAction, String> {
    let date = |flag: &str| {
        matches
            .get_one::<String>(flag)
            .map(|value| validate_date(flag, value))
            .transpose()
    };

    let query = QueryParams {
        return_object: matches.get_one::<String>("return-object").cloned(),
        date: date("date")?,
        start_date: date("start-date")?,
        end_date: date("end-date")?,
        number: matches.get_one::<String>("number").cloned(),
        filters: matches
            .get_many::<String>("filter")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    };

    let output = matches
        .get_one::<String>("output")
        .map(|name| {
            OutputFormat::from_name(name).ok_or_else(|| format!("Unknown output: {}", name))
        })
        .transpose()?
        .unwrap_or(OutputFormat::Display);

    Ok(CliAction::Execute {
        command: Command::Search { query },
        output,
    })
}
