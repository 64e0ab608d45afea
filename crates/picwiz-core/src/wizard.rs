//! # Wizard Sequencer
//!
//! Owns the active step and the answer set, and gates forward navigation.
//!
//! A `Wizard` is an ordinary value: the session controller constructs it and
//! hands `&Wizard` / `&mut Wizard` to whatever renders the screens.
//!
//! Two forward operations exist:
//! - [`Wizard::advance`] moves on unconditionally (no-op at results). The
//!   caller is responsible for checking [`Wizard::can_proceed`] first.
//! - [`Wizard::try_advance`] refuses to leave an unanswered question.

use crate::answers::{Answer, AnswerField, Answers, ContentType};
use crate::error::WizardError;
use crate::profile::Profile;
use crate::resolver::resolve_profile;
use crate::step::{Progress, QUESTION_COUNT, Step};

/// One wizard session's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wizard {
    current_step: Step,
    answers: Answers,
}

impl Wizard {
    /// Start a fresh session at the welcome step with no answers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the welcome step with a pre-filled answer set.
    #[must_use]
    pub fn with_answers(answers: Answers) -> Self {
        Self {
            current_step: Step::FIRST,
            answers,
        }
    }

    // =========================================================================
    // READ ACCESS
    // =========================================================================

    #[must_use]
    pub fn current_step(&self) -> Step {
        self.current_step
    }

    #[must_use]
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// 0 at welcome, 1-5 on the questions, 6 at results.
    #[must_use]
    pub fn step_number(&self) -> usize {
        self.current_step.index()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        QUESTION_COUNT
    }

    /// Question progress, `None` outside the question steps.
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        self.current_step.progress()
    }

    /// Whether the current step's answer is in place.
    ///
    /// Computed from the current step and answers on every call.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        self.answers.is_answered(self.current_step)
    }

    /// True once the terminal results step is reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_step == Step::LAST
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Move to the next step. No-op at results.
    ///
    /// Does not consult [`Self::can_proceed`]; see [`Self::try_advance`].
    /// Returns the step the wizard is on afterwards.
    pub fn advance(&mut self) -> Step {
        if let Some(next) = self.current_step.next() {
            tracing::debug!(from = %self.current_step, to = %next, "advance");
            self.current_step = next;
        }
        self.current_step
    }

    /// Move to the next step only if the current one is answered.
    ///
    /// State is untouched on error.
    pub fn try_advance(&mut self) -> Result<Step, WizardError> {
        if !self.can_proceed() {
            tracing::debug!(step = %self.current_step, "advance refused, answer missing");
            return Err(WizardError::AnswerRequired(self.current_step));
        }
        Ok(self.advance())
    }

    /// Move to the previous step. No-op at welcome.
    pub fn retreat(&mut self) -> Step {
        if let Some(previous) = self.current_step.previous() {
            tracing::debug!(from = %self.current_step, to = %previous, "retreat");
            self.current_step = previous;
        }
        self.current_step
    }

    /// Back to welcome with an empty answer set.
    pub fn reset(&mut self) {
        tracing::debug!(from = %self.current_step, "reset");
        self.current_step = Step::FIRST;
        self.answers = Answers::default();
    }

    // =========================================================================
    // ANSWERS
    // =========================================================================

    /// Overwrite one scalar answer.
    pub fn set_answer(&mut self, answer: impl Into<Answer>) {
        let answer = answer.into();
        tracing::trace!(step = %answer.field().step(), ?answer, "set answer");
        self.answers.set(answer);
    }

    /// Unset one scalar answer.
    pub fn clear_answer(&mut self, field: AnswerField) {
        tracing::trace!(?field, "clear answer");
        self.answers.clear(field);
    }

    /// Add the content type if absent, remove it if present.
    ///
    /// Returns `true` if the type is selected afterwards.
    pub fn toggle_content_type(&mut self, content: ContentType) -> bool {
        let selected = self.answers.toggle_content_type(content);
        tracing::trace!(content = content.as_str(), selected, "toggle content type");
        selected
    }

    /// The profile the current answers resolve to.
    #[must_use]
    pub fn resolve(&self) -> &'static Profile {
        resolve_profile(&self.answers)
    }
}

// =============================================================================
// TESTS
// =============================================================================
