//! # Logging
//!
//! Installs the global `tracing` subscriber. Logs go to stderr so stdout
//! stays clean for text or JSON output.
//!
//! Filter precedence: `RUST_LOG`, then `PICWIZ_LOG`, then the `-v` count.

use crate::config::Config;
use crate::error::CliError;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted after `RUST_LOG`.
pub const LOG_ENV: &str = "PICWIZ_LOG";

/// Initialize the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &Config) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(config.log_color)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
