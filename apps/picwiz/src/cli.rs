//! # CLI Commands
//!
//! Argument definitions and one `cmd_*` function per subcommand.
//!
//! Command functions take the [`Config`] and an output sink, so the binary
//! passes stdout and tests pass a buffer.

use crate::config::Config;
use crate::error::CliError;
use crate::prompt::{DialoguerPrompter, Prompter};
use crate::render;
use crate::session::{SessionSummary, run_session};
use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand};
use picwiz_core::{
    Answers, BrightnessPreference, ColorPreference, ContentType, MotionPreference, ProfileId,
    ViewingTime, Wizard, catalog, resolve_profile,
};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Find the picture profile that fits how you watch.
#[derive(Debug, Parser)]
#[command(name = "picwiz", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output JSON instead of text
    #[arg(long, global = true, env = "PICWIZ_JSON", value_parser = FalseyValueParser::new())]
    pub json: bool,

    /// Disable colored output (also off when `NO_COLOR` is set)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk through the questions interactively (default)
    Run,

    /// Resolve a profile from flags or an answers file, without prompting
    Resolve(ResolveArgs),

    /// List the profile catalog, or show one profile
    Profiles {
        /// Profile id (`game-zone-pro`) or name ("Game Zone Pro")
        name: Option<String>,
    },

    /// List the wizard steps
    Steps,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// JSON answers file; flags override its values
    #[arg(long, value_name = "PATH")]
    pub answers: Option<PathBuf>,

    /// Content types, comma separated (movies, sports, gaming, general)
    #[arg(long, value_delimiter = ',')]
    pub content: Vec<ContentType>,

    /// daytime, nighttime or both
    #[arg(long)]
    pub viewing_time: Option<ViewingTime>,

    /// vivid or natural
    #[arg(long)]
    pub color: Option<ColorPreference>,

    /// smooth or cinematic
    #[arg(long)]
    pub motion: Option<MotionPreference>,

    /// bright or comfortable
    #[arg(long)]
    pub brightness: Option<BrightnessPreference>,
}

impl ResolveArgs {
    /// Answers given on the command line alone.
    #[must_use]
    pub fn flag_answers(&self) -> Answers {
        Answers {
            content_types: self.content.iter().copied().collect(),
            viewing_time: self.viewing_time,
            color_preference: self.color,
            motion_preference: self.motion,
            brightness_preference: self.brightness,
        }
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Dispatch a parsed command line.
pub fn execute(cli: &Cli, config: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    match &cli.command {
        None | Some(Command::Run) => cmd_run(config, out).map(|_| ()),
        Some(Command::Resolve(args)) => cmd_resolve(config, args, out),
        Some(Command::Profiles { name }) => cmd_profiles(config, name.as_deref(), out),
        Some(Command::Steps) => cmd_steps(config, out),
    }
}

/// Interactive wizard on the terminal.
pub fn cmd_run(config: &Config, out: &mut dyn Write) -> Result<SessionSummary, CliError> {
    if !console::user_attended_stderr() {
        return Err(CliError::NotInteractive);
    }
    cmd_run_with(config, &mut DialoguerPrompter, out)
}

/// Interactive wizard with a caller-supplied prompt backend.
pub fn cmd_run_with(
    config: &Config,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<SessionSummary, CliError> {
    let mut wizard = Wizard::new();
    let summary = run_session(&mut wizard, prompter, out, config)?;

    if config.json {
        // Answers and profile always come from the same round; with no
        // finished round there is no profile and the answers are partial.
        let report = match summary.last_round() {
            Some(round) => RunReport {
                answers: &round.answers,
                profile: Some(round.profile.profile()),
                abandoned: summary.abandoned,
            },
            None => RunReport {
                answers: wizard.answers(),
                profile: None,
                abandoned: summary.abandoned,
            },
        };
        write!(out, "{}", render::to_json(&report)?)?;
    }
    Ok(summary)
}

#[derive(Serialize)]
struct RunReport<'a> {
    answers: &'a Answers,
    profile: Option<&'static picwiz_core::Profile>,
    abandoned: bool,
}

/// Load an answers file.
pub fn load_answers(path: &Path) -> Result<Answers, CliError> {
    let content = std::fs::read_to_string(path)?;
    let answers: Answers = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded answers file");
    Ok(answers)
}

/// Resolve without prompting.
pub fn cmd_resolve(config: &Config, args: &ResolveArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let mut answers = match &args.answers {
        Some(path) => load_answers(path)?,
        None => Answers::default(),
    };
    answers.merge(&args.flag_answers());

    if !answers.is_complete() {
        tracing::info!("resolving from a partial answer set");
    }

    let profile = resolve_profile(&answers);

    if config.json {
        #[derive(Serialize)]
        struct Report<'a> {
            answers: &'a Answers,
            profile: &'static picwiz_core::Profile,
        }
        write!(out, "{}", render::to_json(&Report { answers: &answers, profile })?)?;
    } else {
        write!(out, "{}", render::profile_text(profile, config.color))?;
    }
    Ok(())
}

/// List the catalog, or show one entry.
pub fn cmd_profiles(config: &Config, name: Option<&str>, out: &mut dyn Write) -> Result<(), CliError> {
    match name {
        Some(name) => {
            let profile = name.parse::<ProfileId>()?.profile();
            if config.json {
                write!(out, "{}", render::to_json(profile)?)?;
            } else {
                write!(out, "{}", render::profile_text(profile, config.color))?;
            }
        }
        None => {
            if config.json {
                write!(out, "{}", render::to_json(catalog())?)?;
            } else {
                write!(out, "{}", render::catalog_text(catalog(), config.color))?;
            }
        }
    }
    Ok(())
}

/// List the step sequence.
pub fn cmd_steps(config: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    if config.json {
        write!(out, "{}", render::to_json(&render::step_views())?)?;
    } else {
        write!(out, "{}", render::steps_text(config.color))?;
    }
    Ok(())
}
