//! # Answers Module
//!
//! The answer set collected across the five question steps.
//!
//! Every choice is a closed enum. Scalar questions are `Option`s that stay
//! `None` until the user answers; content types are a multi-select held in a
//! `BTreeSet`, so duplicates are impossible and iteration order is stable.

use crate::error::ParseError;
use crate::step::Step;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CHOICE ENUMS
// =============================================================================

/// Declares a closed choice enum with its wire names and display labels.
///
/// Variant order is the on-screen option order.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, $label:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All values in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Kebab-case wire name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Label shown next to the option.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| ParseError::unknown($kind, needle, &[$($wire),+]))
            }
        }
    };
}

choice_enum! {
    /// What the user mostly watches. Multi-select.
    ContentType, "content type" {
        Movies => "movies", "Movies";
        Sports => "sports", "Sports";
        Gaming => "gaming", "Gaming";
        General => "general", "General / Mixed";
    }
}

choice_enum! {
    /// When the user usually watches.
    ViewingTime, "viewing time" {
        Daytime => "daytime", "Daytime";
        Nighttime => "nighttime", "Nighttime";
        Both => "both", "Both";
    }
}

choice_enum! {
    /// Preferred color rendering.
    ColorPreference, "color preference" {
        Vivid => "vivid", "Vivid";
        Natural => "natural", "Natural";
    }
}

choice_enum! {
    /// Preferred motion handling.
    MotionPreference, "motion preference" {
        /// Motion smoothing on.
        Smooth => "smooth", "Clear motion";
        /// Original frame cadence.
        Cinematic => "cinematic", "Original motion";
    }
}

choice_enum! {
    /// Preferred overall picture brightness.
    BrightnessPreference, "brightness preference" {
        Bright => "bright", "Punchy & bright";
        Comfortable => "comfortable", "Soft & comfortable";
    }
}

impl MotionPreference {
    /// Secondary line shown under the motion option.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Smooth => "Smoother, less blur.",
            Self::Cinematic => "Cinematic pacing.",
        }
    }
}

// =============================================================================
// SINGLE ANSWERS
// =============================================================================

/// One scalar answer, tagged with the field it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    ViewingTime(ViewingTime),
    ColorPreference(ColorPreference),
    MotionPreference(MotionPreference),
    BrightnessPreference(BrightnessPreference),
}

impl Answer {
    /// The field this answer writes.
    #[must_use]
    pub const fn field(self) -> AnswerField {
        match self {
            Self::ViewingTime(_) => AnswerField::ViewingTime,
            Self::ColorPreference(_) => AnswerField::ColorPreference,
            Self::MotionPreference(_) => AnswerField::MotionPreference,
            Self::BrightnessPreference(_) => AnswerField::BrightnessPreference,
        }
    }
}

impl From<ViewingTime> for Answer {
    fn from(v: ViewingTime) -> Self {
        Self::ViewingTime(v)
    }
}

impl From<ColorPreference> for Answer {
    fn from(v: ColorPreference) -> Self {
        Self::ColorPreference(v)
    }
}

impl From<MotionPreference> for Answer {
    fn from(v: MotionPreference) -> Self {
        Self::MotionPreference(v)
    }
}

impl From<BrightnessPreference> for Answer {
    fn from(v: BrightnessPreference) -> Self {
        Self::BrightnessPreference(v)
    }
}

/// Names one of the four scalar answer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnswerField {
    ViewingTime,
    ColorPreference,
    MotionPreference,
    BrightnessPreference,
}

impl AnswerField {
    /// The question step that asks for this field.
    #[must_use]
    pub const fn step(self) -> Step {
        match self {
            Self::ViewingTime => Step::ViewingTime,
            Self::ColorPreference => Step::ColorPreference,
            Self::MotionPreference => Step::MotionPreference,
            Self::BrightnessPreference => Step::Brightness,
        }
    }
}

// =============================================================================
// ANSWER SET
// =============================================================================

/// The accumulated selections across all question steps.
///
/// Missing fields deserialize as unset, so partial answer files are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Answers {
    /// Multi-select content categories.
    pub content_types: BTreeSet<ContentType>,
    pub viewing_time: Option<ViewingTime>,
    pub color_preference: Option<ColorPreference>,
    pub motion_preference: Option<MotionPreference>,
    pub brightness_preference: Option<BrightnessPreference>,
}

impl Answers {
    /// Create an empty answer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to select a content type.
    #[must_use]
    pub fn with_content(mut self, content: ContentType) -> Self {
        self.content_types.insert(content);
        self
    }

    /// Builder-style helper to set a scalar answer.
    #[must_use]
    pub fn with(mut self, answer: impl Into<Answer>) -> Self {
        self.set(answer.into());
        self
    }

    /// Overwrite one scalar field.
    pub fn set(&mut self, answer: Answer) {
        match answer {
            Answer::ViewingTime(v) => self.viewing_time = Some(v),
            Answer::ColorPreference(v) => self.color_preference = Some(v),
            Answer::MotionPreference(v) => self.motion_preference = Some(v),
            Answer::BrightnessPreference(v) => self.brightness_preference = Some(v),
        }
    }

    /// Unset one scalar field.
    pub fn clear(&mut self, field: AnswerField) {
        match field {
            AnswerField::ViewingTime => self.viewing_time = None,
            AnswerField::ColorPreference => self.color_preference = None,
            AnswerField::MotionPreference => self.motion_preference = None,
            AnswerField::BrightnessPreference => self.brightness_preference = None,
        }
    }

    /// Add the content type if absent, remove it if present.
    ///
    /// Returns `true` if the type is selected afterwards.
    pub fn toggle_content_type(&mut self, content: ContentType) -> bool {
        if self.content_types.remove(&content) {
            false
        } else {
            self.content_types.insert(content);
            true
        }
    }

    /// Whether the given field currently holds a value.
    #[must_use]
    pub fn has(&self, field: AnswerField) -> bool {
        match field {
            AnswerField::ViewingTime => self.viewing_time.is_some(),
            AnswerField::ColorPreference => self.color_preference.is_some(),
            AnswerField::MotionPreference => self.motion_preference.is_some(),
            AnswerField::BrightnessPreference => self.brightness_preference.is_some(),
        }
    }

    /// Gate predicate: may the user leave `step` going forward?
    ///
    /// Welcome and results always pass. Content type needs at least one
    /// selection; the scalar questions need their field set.
    #[must_use]
    pub fn is_answered(&self, step: Step) -> bool {
        match step {
            Step::Welcome | Step::Results => true,
            Step::ContentType => !self.content_types.is_empty(),
            Step::ViewingTime => self.has(AnswerField::ViewingTime),
            Step::ColorPreference => self.has(AnswerField::ColorPreference),
            Step::MotionPreference => self.has(AnswerField::MotionPreference),
            Step::Brightness => self.has(AnswerField::BrightnessPreference),
        }
    }

    /// True when all five questions have an answer.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Step::ALL
            .iter()
            .filter(|s| s.is_question())
            .all(|s| self.is_answered(*s))
    }

    /// Apply every answer that is set in `other`, leaving the rest untouched.
    ///
    /// A non-empty content selection in `other` replaces ours wholesale.
    pub fn merge(&mut self, other: &Answers) {
        if !other.content_types.is_empty() {
            self.content_types = other.content_types.clone();
        }
        if let Some(v) = other.viewing_time {
            self.viewing_time = Some(v);
        }
        if let Some(v) = other.color_preference {
            self.color_preference = Some(v);
        }
        if let Some(v) = other.motion_preference {
            self.motion_preference = Some(v);
        }
        if let Some(v) = other.brightness_preference {
            self.brightness_preference = Some(v);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" Movies ".parse::<ContentType>(), Ok(ContentType::Movies));
        assert_eq!("NIGHTTIME".parse::<ViewingTime>(), Ok(ViewingTime::Nighttime));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = "cartoons".parse::<ContentType>().unwrap_err();
        assert!(matches!(err, ParseError::UnknownValue { kind: "content type", .. }));
    }

    #[test]
    fn labels_follow_display_order() {
        let labels: Vec<_> = ContentType::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Movies", "Sports", "Gaming", "General / Mixed"]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut answers = Answers::new();
        assert!(answers.toggle_content_type(ContentType::Sports));
        assert!(answers.content_types.contains(&ContentType::Sports));
        assert!(!answers.toggle_content_type(ContentType::Sports));
        assert!(answers.content_types.is_empty());
    }

    #[test]
    fn set_then_clear_field() {
        let mut answers = Answers::new();
        answers.set(Answer::ColorPreference(ColorPreference::Natural));
        assert!(answers.has(AnswerField::ColorPreference));
        answers.clear(AnswerField::ColorPreference);
        assert_eq!(answers.color_preference, None);
    }

    #[test]
    fn gate_predicate_per_step() {
        let mut answers = Answers::new();
        assert!(answers.is_answered(Step::Welcome));
        assert!(answers.is_answered(Step::Results));
        assert!(!answers.is_answered(Step::ContentType));
        assert!(!answers.is_answered(Step::Brightness));

        answers.toggle_content_type(ContentType::Gaming);
        answers.set(BrightnessPreference::Bright.into());
        assert!(answers.is_answered(Step::ContentType));
        assert!(answers.is_answered(Step::Brightness));
        assert!(!answers.is_answered(Step::ViewingTime));
    }

    #[test]
    fn each_answer_satisfies_its_own_step() {
        let samples: [Answer; 4] = [
            ViewingTime::Nighttime.into(),
            ColorPreference::Vivid.into(),
            MotionPreference::Cinematic.into(),
            BrightnessPreference::Comfortable.into(),
        ];
        for answer in samples {
            let step = answer.field().step();
            assert!(step.is_question());
            let mut answers = Answers::new();
            assert!(!answers.is_answered(step));
            answers.set(answer);
            assert!(answers.is_answered(step), "{step} not answered");
            answers.clear(answer.field());
            assert!(!answers.is_answered(step));
        }
    }

    #[test]
    fn complete_needs_all_five_questions() {
        let answers = Answers::new()
            .with_content(ContentType::Movies)
            .with(ViewingTime::Both)
            .with(ColorPreference::Vivid)
            .with(MotionPreference::Cinematic);
        assert!(!answers.is_complete());
        assert!(answers.with(BrightnessPreference::Comfortable).is_complete());
    }

    #[test]
    fn merge_overrides_only_set_fields() {
        let mut base = Answers::new()
            .with_content(ContentType::Movies)
            .with(ViewingTime::Daytime)
            .with(ColorPreference::Vivid);
        let overrides = Answers::new().with(ViewingTime::Nighttime);
        base.merge(&overrides);

        assert_eq!(base.viewing_time, Some(ViewingTime::Nighttime));
        assert_eq!(base.color_preference, Some(ColorPreference::Vivid));
        assert!(base.content_types.contains(&ContentType::Movies));
    }

    #[test]
    fn json_uses_kebab_case_and_tolerates_missing_fields() {
        let answers: Answers =
            serde_json::from_str(r#"{"content_types": ["gaming", "gaming"], "viewing_time": "nighttime"}"#)
                .unwrap();
        assert_eq!(answers.content_types.len(), 1);
        assert_eq!(answers.viewing_time, Some(ViewingTime::Nighttime));
        assert_eq!(answers.brightness_preference, None);

        let json = serde_json::to_string(&Answers::new().with(MotionPreference::Smooth)).unwrap();
        assert!(json.contains(r#""motion_preference":"smooth""#));
    }
}
