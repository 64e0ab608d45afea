//! picwiz: terminal picture-profile wizard.
//!
//! Parses arguments, installs logging, then dispatches to a `cmd_*` function.

use clap::Parser;
use picwiz::cli::{Cli, execute};
use picwiz::config::Config;
use picwiz::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    if let Err(e) = init_logging(&config) {
        eprintln!("warning: {e}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match execute(&cli, &config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
