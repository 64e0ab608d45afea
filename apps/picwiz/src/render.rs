//! # Rendering
//!
//! Text and JSON views of profiles, the catalog and the step sequence.
//! All functions return strings; callers decide where they are written.

use crate::error::CliError;
use console::{StyledObject, style};
use picwiz_core::{Profile, Progress, Step};
use serde::Serialize;

fn paint<D>(value: D, color: bool) -> StyledObject<D> {
    style(value).force_styling(color)
}

/// Pretty-printed JSON followed by a newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// Name, description and one line per setting.
#[must_use]
pub fn profile_text(profile: &Profile, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", paint(profile.name, color).cyan().bold()));
    out.push_str(&format!("{}\n", paint(profile.description, color).dim()));
    for setting in profile.settings {
        out.push_str(&format!("  {} {}\n", setting.icon, setting.label));
    }
    out
}

/// One line per catalog entry: id, name, description.
#[must_use]
pub fn catalog_text(profiles: &[Profile], color: bool) -> String {
    let id_width = profiles.iter().map(|p| p.id.as_str().len()).max().unwrap_or(0);
    let name_width = profiles.iter().map(|p| p.name.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for profile in profiles {
        out.push_str(&format!(
            "{:<id_width$}  {}  {}\n",
            profile.id.as_str(),
            paint(format!("{:<name_width$}", profile.name), color).bold(),
            profile.description,
        ));
    }
    out
}

/// The step sequence with numbers and screen headings.
#[must_use]
pub fn steps_text(color: bool) -> String {
    let mut out = String::new();
    for step in Step::ALL {
        let marker = if step.is_question() { "?" } else { " " };
        out.push_str(&format!(
            "{} {} {:<18} {}\n",
            step.index(),
            marker,
            paint(step.as_str(), color).yellow(),
            step.prompt()
        ));
    }
    out
}

/// Serializable view of one step for `steps --json`.
#[derive(Debug, Serialize)]
pub struct StepView {
    pub number: usize,
    pub name: &'static str,
    pub question: bool,
    pub prompt: &'static str,
}

#[must_use]
pub fn step_views() -> Vec<StepView> {
    Step::ALL
        .iter()
        .map(|s| StepView {
            number: s.index(),
            name: s.as_str(),
            question: s.is_question(),
            prompt: s.prompt(),
        })
        .collect()
}

/// Dot bar for question progress: `●●○○○`.
#[must_use]
pub fn progress_dots(progress: Progress) -> String {
    (0..progress.total)
        .map(|i| if i <= progress.completed() { '●' } else { '○' })
        .collect()
}

/// `Question 2 of 5  ●●○○○`
#[must_use]
pub fn progress_line(progress: Progress, color: bool) -> String {
    format!(
        "Question {} of {}  {}",
        progress.current,
        progress.total,
        paint(progress_dots(progress), color).cyan()
    )
}
