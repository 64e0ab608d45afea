//! # Interactive Session
//!
//! Drives one [`Wizard`] from welcome to results through a [`Prompter`].
//!
//! The session owns no state of its own: the caller constructs the wizard
//! and passes it in, and each screen function receives it explicitly.
//! Forward moves go through `try_advance`, so an unanswered question is
//! repeated instead of skipped.

use crate::config::Config;
use crate::error::CliError;
use crate::prompt::Prompter;
use crate::render;
use picwiz_core::{
    Answers, BrightnessPreference, ColorPreference, ContentType, MotionPreference, ProfileId, Step,
    ViewingTime, Wizard, WizardError,
};
use std::io::Write;

/// One completed pass through the questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Answers as they stood on the results screen.
    pub answers: Answers,
    /// The profile those answers resolved to.
    pub profile: ProfileId,
}

/// What happened during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Results screens shown, one per completed round.
    pub rounds: Vec<Round>,
    /// True if the user quit before reaching results in the last round.
    pub abandoned: bool,
}

impl SessionSummary {
    /// The most recent completed round.
    #[must_use]
    pub fn last_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// The most recent recommendation.
    #[must_use]
    pub fn last(&self) -> Option<ProfileId> {
        self.last_round().map(|r| r.profile)
    }

    /// Every recommendation, in order.
    #[must_use]
    pub fn profiles(&self) -> Vec<ProfileId> {
        self.rounds.iter().map(|r| r.profile).collect()
    }
}

/// Run the wizard until the user declines to start over.
pub fn run_session(
    wizard: &mut Wizard,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    config: &Config,
) -> Result<SessionSummary, CliError> {
    let mut summary = SessionSummary::default();

    loop {
        let step = wizard.current_step();
        tracing::debug!(%step, "showing screen");

        match step {
            Step::Welcome => {
                if !welcome_screen(prompter, out, config)? {
                    summary.abandoned = true;
                    return Ok(summary);
                }
                wizard.try_advance()?;
            }
            Step::ContentType => content_screen(wizard, prompter, out, config)?,
            Step::ViewingTime => scalar_screen(wizard, prompter, out, config, ViewingTime::ALL, |a| {
                a.viewing_time
            })?,
            Step::ColorPreference => {
                scalar_screen(wizard, prompter, out, config, ColorPreference::ALL, |a| {
                    a.color_preference
                })?;
            }
            Step::MotionPreference => {
                scalar_screen(wizard, prompter, out, config, MotionPreference::ALL, |a| {
                    a.motion_preference
                })?;
            }
            Step::Brightness => {
                scalar_screen(wizard, prompter, out, config, BrightnessPreference::ALL, |a| {
                    a.brightness_preference
                })?;
            }
            Step::Results => {
                let profile = wizard.resolve();
                tracing::info!(profile = profile.id.as_str(), "recommendation ready");
                summary.rounds.push(Round {
                    answers: wizard.answers().clone(),
                    profile: profile.id,
                });

                if !config.json {
                    writeln!(out)?;
                    write!(out, "{}", render::profile_text(profile, config.color))?;
                    writeln!(out)?;
                }

                if prompter.confirm("Start over?", false)? {
                    wizard.reset();
                } else {
                    return Ok(summary);
                }
            }
        }
    }
}

fn welcome_screen(prompter: &mut dyn Prompter, out: &mut dyn Write, config: &Config) -> Result<bool, CliError> {
    if !config.json {
        writeln!(out, "{}", Step::Welcome.prompt())?;
    }
    prompter.confirm("Ready to begin?", true)
}

fn show_progress(wizard: &Wizard, out: &mut dyn Write, config: &Config) -> Result<(), CliError> {
    if config.json {
        return Ok(());
    }
    if let Some(progress) = wizard.progress() {
        writeln!(out)?;
        writeln!(out, "{}", render::progress_line(progress, config.color))?;
    }
    Ok(())
}

fn content_screen(
    wizard: &mut Wizard,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    config: &Config,
) -> Result<(), CliError> {
    show_progress(wizard, out, config)?;

    let items: Vec<String> = ContentType::ALL.iter().map(|c| c.label().to_string()).collect();
    let checked: Vec<bool> = ContentType::ALL
        .iter()
        .map(|c| wizard.answers().content_types.contains(c))
        .collect();

    let Some(picked) = prompter.multi_select(Step::ContentType.prompt(), &items, &checked)? else {
        wizard.retreat();
        return Ok(());
    };

    for (i, content) in ContentType::ALL.iter().enumerate() {
        if picked.contains(&i) != checked[i] {
            wizard.toggle_content_type(*content);
        }
    }

    match wizard.try_advance() {
        Ok(_) => Ok(()),
        Err(WizardError::AnswerRequired(_)) => {
            writeln!(out, "Pick at least one option to continue.")?;
            Ok(())
        }
    }
}

/// Options a single-choice question can offer.
trait ScalarOption: Copy + PartialEq + Into<picwiz_core::Answer> {
    fn option_label(self) -> String;
}

impl ScalarOption for ViewingTime {
    fn option_label(self) -> String {
        self.label().to_string()
    }
}

impl ScalarOption for ColorPreference {
    fn option_label(self) -> String {
        self.label().to_string()
    }
}

impl ScalarOption for MotionPreference {
    fn option_label(self) -> String {
        format!("{} ({})", self.label(), self.description())
    }
}

impl ScalarOption for BrightnessPreference {
    fn option_label(self) -> String {
        self.label().to_string()
    }
}

fn scalar_screen<T: ScalarOption>(
    wizard: &mut Wizard,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    config: &Config,
    options: &[T],
    current: impl Fn(&Answers) -> Option<T>,
) -> Result<(), CliError> {
    show_progress(wizard, out, config)?;

    let items: Vec<String> = options.iter().map(|o| o.option_label()).collect();
    let default = current(wizard.answers())
        .and_then(|c| options.iter().position(|o| *o == c))
        .unwrap_or(0);

    match prompter.select(wizard.current_step().prompt(), &items, default)? {
        Some(i) => {
            let Some(choice) = options.get(i).copied() else {
                return Err(CliError::InvalidArgument(format!("no option {i}")));
            };
            wizard.set_answer(choice);
            wizard.try_advance()?;
        }
        None => {
            wizard.retreat();
        }
    }
    Ok(())
}
