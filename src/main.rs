mod apply_cmd;
mod build_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one subcommand to completion.
fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => build_cmd::run(args),
        Command::Apply(args) => apply_cmd::run(args),
    }
}
