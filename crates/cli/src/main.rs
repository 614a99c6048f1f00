//! NeoDB CLI: search NEO close approaches from the command line.
//!
//! `neodb [--config PATH] [--data PATH] [--json] COMMAND` loads the data
//! file once, runs one command, prints or writes the result and exits.
//! Logs go to stderr; set `RUST_LOG` (e.g. `RUST_LOG=neodb=debug`) for more.

mod commands;
mod format;
mod parse;

use std::path::Path;
use std::process;

use neodb_executor::{Command, Executor, NeoConfig, OutputFormat, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_json, format_written, OutputMode};
use parse::{matches_to_action, CliAction};

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(neodb_executor::CONFIG_FILE_NAME);

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(2);
        }
    };

    let (command, output) = match action {
        CliAction::Setup => process::exit(run_setup(Path::new(config_path))),
        CliAction::Execute { command, output } => (command, output),
    };

    let executor = match open_executor(Path::new(config_path), matches.get_one::<String>("data"))
    {
        Ok(executor) => executor,
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    };

    process::exit(run_command(&executor, command, output, output_mode));
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_executor(config_path: &Path, data: Option<&String>) -> Result<Executor> {
    let mut config = NeoConfig::from_file_or_default(config_path)?;
    if let Some(data) = data {
        config = config.with_data_file(data);
    }
    let executor = Executor::open(config)?;
    debug!(
        target: "neodb::cli",
        config = %config_path.display(),
        data_file = %executor.config().data_file.display(),
        default_number = executor.config().default_number,
        "Executor opened"
    );
    Ok(executor)
}

fn run_command(executor: &Executor, command: Command, output: OutputFormat, mode: OutputMode) -> i32 {
    let result = match executor.execute(command) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            return 1;
        }
    };
    debug!(
        target: "neodb::cli",
        kind = ?result.kind(),
        results = result.len(),
        "Command complete"
    );

    match (output, mode) {
        (OutputFormat::Display, OutputMode::Json) => {
            println!("{}", format_json(&result));
            0
        }
        (OutputFormat::Display, OutputMode::Human) => {
            if executor.write(output.name(), &result) {
                0
            } else {
                eprintln!("(error) failed to write results to stdout");
                1
            }
        }
        (OutputFormat::CsvFile, _) => {
            if !executor.write(output.name(), &result) {
                eprintln!(
                    "(error) failed to write {}",
                    executor.writer().output_path().display()
                );
                return 1;
            }
            println!(
                "{}",
                format_written(
                    executor.writer().output_path(),
                    executor.csv_row_count(&result),
                    mode
                )
            );
            0
        }
    }
}

fn run_setup(config_path: &Path) -> i32 {
    match NeoConfig::write_default_if_missing(config_path) {
        Ok(true) => {
            eprintln!("Wrote default config to {}", config_path.display());
            0
        }
        Ok(false) => {
            eprintln!("{} already exists, left unchanged", config_path.display());
            0
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
