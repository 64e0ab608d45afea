//! # Picwiz Core
//!
//! Deterministic engine for the picture-profile wizard.
//!
//! - [`wizard`]: the step sequencer that owns the current step and answers
//! - [`resolver`]: the pure `Answers → Profile` decision table
//! - [`profile`]: the static catalog of eleven profiles
//! - [`answers`] and [`step`]: the data model
//!
//! No I/O, no async, no global state. Front ends own a [`Wizard`] value and
//! pass it to their screens explicitly.
//!
//! ```
//! use picwiz_core::{ContentType, ViewingTime, Wizard};
//!
//! let mut wizard = Wizard::new();
//! wizard.advance();
//! wizard.toggle_content_type(ContentType::Movies);
//! wizard.set_answer(ViewingTime::Nighttime);
//! assert_eq!(wizard.resolve().name, "Cinema Night Mode");
//! ```

pub mod answers;
pub mod error;
pub mod profile;
pub mod resolver;
pub mod step;
pub mod wizard;

pub use answers::{
    Answer, AnswerField, Answers, BrightnessPreference, ColorPreference, ContentType,
    MotionPreference, ViewingTime,
};
pub use error::{ParseError, WizardError};
pub use profile::{Profile, ProfileId, Setting, catalog};
pub use resolver::{CONTENT_PRIORITY, primary_content_type, resolve, resolve_profile};
pub use step::{Progress, QUESTION_COUNT, Step};
pub use wizard::Wizard;
