//! # Prompt Backends
//!
//! The interactive session reads user input only through [`Prompter`].
//! [`DialoguerPrompter`] talks to the terminal; [`ScriptedPrompter`] replays
//! canned replies for tests and non-terminal drivers.
//!
//! A `None` reply from `select` or `multi_select` means "go back".

use crate::error::CliError;
use dialoguer::{Confirm, MultiSelect, Select};
use std::collections::VecDeque;

/// Label of the extra entry appended to single-choice lists.
pub const BACK_LABEL: &str = "← Back";

/// Source of user decisions for the interactive wizard.
pub trait Prompter {
    /// Pick one item. `None` means back.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>, CliError>;

    /// Pick any subset. `checked` holds the current selection. `None` means back.
    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Option<Vec<usize>>, CliError>;

    /// Yes or no.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError>;
}

// =============================================================================
// TERMINAL
// =============================================================================

/// Arrow-key prompts on stderr via `dialoguer`.
///
/// Single-choice lists get a trailing [`BACK_LABEL`] entry; Esc also goes back.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>, CliError> {
        let mut entries: Vec<&str> = items.iter().map(String::as_str).collect();
        entries.push(BACK_LABEL);

        let picked = Select::new()
            .with_prompt(prompt)
            .items(&entries[..])
            .default(default.min(items.len()))
            .interact_opt()?;

        Ok(picked.filter(|i| *i < items.len()))
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Option<Vec<usize>>, CliError> {
        let picked = MultiSelect::new()
            .with_prompt(format!("{prompt}  (space toggles, enter continues, esc goes back)"))
            .items(items)
            .defaults(checked)
            .interact_opt()?;
        Ok(picked)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }
}

// =============================================================================
// SCRIPTED
// =============================================================================

/// One canned reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Select(Option<usize>),
    MultiSelect(Option<Vec<usize>>),
    Confirm(bool),
}

/// Replays replies in order. Fails when the script runs out or the next
/// reply does not fit the prompt kind.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    /// Every prompt text shown, in order.
    pub transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            transcript: Vec::new(),
        }
    }

    /// Replies not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self, prompt: &str) -> Result<Reply, CliError> {
        self.transcript.push(prompt.to_string());
        self.replies
            .pop_front()
            .ok_or_else(|| CliError::InvalidArgument(format!("no scripted reply for '{prompt}'")))
    }

    fn mismatch(prompt: &str, reply: &Reply) -> CliError {
        CliError::InvalidArgument(format!("scripted reply {reply:?} does not fit '{prompt}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[String], _default: usize) -> Result<Option<usize>, CliError> {
        match self.next(prompt)? {
            Reply::Select(Some(i)) if i >= items.len() => Err(CliError::InvalidArgument(format!(
                "scripted choice {i} out of range for '{prompt}'"
            ))),
            Reply::Select(choice) => Ok(choice),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }

    fn multi_select(
        &mut self,
        prompt: &str,
        items: &[String],
        _checked: &[bool],
    ) -> Result<Option<Vec<usize>>, CliError> {
        match self.next(prompt)? {
            Reply::MultiSelect(Some(picked)) if picked.iter().any(|i| *i >= items.len()) => Err(
                CliError::InvalidArgument(format!("scripted choice out of range for '{prompt}'")),
            ),
            Reply::MultiSelect(choice) => Ok(choice),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool, CliError> {
        match self.next(prompt)? {
            Reply::Confirm(answer) => Ok(answer),
            other => Err(Self::mismatch(prompt, &other)),
        }
    }
}
