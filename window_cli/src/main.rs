//! # window-quote
//!
//! Command-line front end for the Fenestra quoting engine: price windows,
//! browse the catalog and keep quotes in project files.
//!
//! Reports and JSON go to stdout; logs go to stderr (`RUST_LOG`).

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use window_core::CalcError;

use cli::{Cli, Command};
use commands::Session;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(calc) = e.downcast_ref::<CalcError>() {
                eprintln!("Error code: {}", calc.error_code());
                if let Ok(json) = serde_json::to_string(calc) {
                    tracing::debug!(error = %json, "structured error");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let session = Session::load(cli.catalog.as_deref(), cli.settings.as_deref())?;

    match &cli.command {
        Command::Calculate {
            window,
            json,
            currency,
        } => commands::calculate_window(&session, window, *json, currency),
        Command::Catalog(command) => commands::catalog(&session, command),
        Command::Project(command) => commands::project(&session, command),
    }
}
