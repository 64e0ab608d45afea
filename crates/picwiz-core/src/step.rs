//! # Step Module
//!
//! The fixed, linear step sequence of the wizard.
//!
//! welcome → content-type → viewing-time → color-preference →
//! motion-preference → brightness → results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of question steps between welcome and results.
pub const QUESTION_COUNT: usize = 5;

/// One stage of the wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    #[default]
    Welcome,
    ContentType,
    ViewingTime,
    ColorPreference,
    MotionPreference,
    Brightness,
    Results,
}

impl Step {
    /// All steps in sequence order.
    pub const ALL: [Step; 7] = [
        Step::Welcome,
        Step::ContentType,
        Step::ViewingTime,
        Step::ColorPreference,
        Step::MotionPreference,
        Step::Brightness,
        Step::Results,
    ];

    /// First step of the sequence.
    pub const FIRST: Step = Step::Welcome;

    /// Terminal step of the sequence.
    pub const LAST: Step = Step::Results;

    /// Position in the sequence: 0 at welcome, 1-5 on questions, 6 at results.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Step at `index`, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    /// The following step, or `None` at results.
    #[must_use]
    pub fn next(self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` at welcome.
    #[must_use]
    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// True for the five steps that ask the user something.
    #[must_use]
    pub const fn is_question(self) -> bool {
        !matches!(self, Step::Welcome | Step::Results)
    }

    /// Kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Step::Welcome => "welcome",
            Step::ContentType => "content-type",
            Step::ViewingTime => "viewing-time",
            Step::ColorPreference => "color-preference",
            Step::MotionPreference => "motion-preference",
            Step::Brightness => "brightness",
            Step::Results => "results",
        }
    }

    /// Heading shown on the step's screen.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Step::Welcome => "Perfect Picture. Personalized in seconds.",
            Step::ContentType => "What do you watch most? (Select all that apply)",
            Step::ViewingTime => "When do you watch?",
            Step::ColorPreference => "Which looks better to you?",
            Step::MotionPreference => "Do you want smoother motion or a cinematic look?",
            Step::Brightness => "How should the picture feel?",
            Step::Results => "Your picture profile",
        }
    }

    /// Question progress, defined only on question steps.
    #[must_use]
    pub fn progress(self) -> Option<Progress> {
        self.is_question().then(|| Progress {
            current: self.index(),
            total: QUESTION_COUNT,
        })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "Question `current` of `total`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// 1-based question number.
    pub current: usize,
    pub total: usize,
}

impl Progress {
    /// Number of questions already behind the user.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.current.saturating_sub(1)
    }
}

// =============================================================================
// TESTS
// =============================================================================
