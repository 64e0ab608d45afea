//! # Error Module
//!
//! Error types for the wizard engine.
//!
//! The sequencer operations themselves are total. Errors only come from
//! parsing external text into the closed enums and from the gated advance.

use crate::step::Step;
use thiserror::Error;

/// Failure to parse a wire name into one of the closed enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The value is not a member of the named enum.
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownValue {
        /// Which enum was being parsed (e.g. "content type").
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted wire names.
        expected: String,
    },

    /// No catalog entry matches the given id or display name.
    #[error("unknown profile '{0}'")]
    UnknownProfile(String),
}

impl ParseError {
    pub(crate) fn unknown(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self::UnknownValue {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Errors raised by the gated sequencer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The current question step has no answer yet.
    #[error("step '{0}' needs an answer before continuing")]
    AnswerRequired(Step),
}
