//! # Configuration
//!
//! Runtime settings assembled from the parsed command line (with its
//! environment fallbacks) and passed explicitly to every command.

use crate::cli::Cli;
use std::ffi::OsStr;

/// Any non-empty value turns color off, per <https://no-color.org>.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Settings shared by all commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Emit JSON instead of text on stdout.
    pub json: bool,
    /// Style text output with terminal colors.
    pub color: bool,
    /// Style log lines on stderr.
    pub log_color: bool,
    /// Number of `-v` flags.
    pub verbosity: u8,
}

impl Config {
    /// Build from parsed arguments and `NO_COLOR`. Each color switch is also
    /// off when its stream is not a color-capable terminal.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let allowed = !cli.no_color && !no_color_requested(std::env::var_os(NO_COLOR_ENV).as_deref());
        Self {
            json: cli.json,
            color: allowed && console::colors_enabled(),
            log_color: allowed && console::colors_enabled_stderr(),
            verbosity: cli.verbose,
        }
    }

    /// Log filter used when neither `RUST_LOG` nor `PICWIZ_LOG` is set.
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "picwiz=debug,picwiz_core=debug",
            _ => "trace",
        }
    }
}

/// True when a `NO_COLOR` value asks for plain output.
#[must_use]
pub fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
