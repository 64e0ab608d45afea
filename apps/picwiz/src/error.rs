//! # CLI Errors
//!
//! Every failure the binary can report. `main` prints the message and exits 1.

use picwiz_core::{ParseError, WizardError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("the interactive wizard needs a terminal; use `picwiz resolve` instead")]
    NotInteractive,

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
