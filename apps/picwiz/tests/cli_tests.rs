//! Integration tests for picwiz CLI commands.
//!
//! Uses tempfile for answers files and a scripted prompter for the
//! interactive flow.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use picwiz::cli::{
    Cli, Command, ResolveArgs, cmd_profiles, cmd_resolve, cmd_run_with, cmd_steps, execute,
    load_answers,
};
use picwiz::config::Config;
use picwiz::error::CliError;
use picwiz::prompt::{Reply, ScriptedPrompter};
use picwiz_core::{
    Answers, BrightnessPreference, ContentType, ProfileId, ViewingTime, resolve_profile,
};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write an answers file into `dir`.
fn create_answers_json(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("answers.json");
    std::fs::write(&path, content).unwrap();
    path
}

fn text_config() -> Config {
    Config::default()
}

fn json_config() -> Config {
    Config {
        json: true,
        ..Config::default()
    }
}

fn run_resolve(config: &Config, args: &ResolveArgs) -> String {
    let mut out = Vec::new();
    cmd_resolve(config, args, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// ARGUMENT PARSING TESTS
// =============================================================================

#[test]
fn test_no_subcommand_means_run() {
    let cli = Cli::try_parse_from(["picwiz"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.json);
}

#[test]
fn test_parse_resolve_flags() {
    let cli = Cli::try_parse_from([
        "picwiz",
        "--json",
        "resolve",
        "--content",
        "movies,gaming",
        "--viewing-time",
        "nighttime",
    ])
    .unwrap();
    assert!(cli.json);
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve");
    };
    assert_eq!(args.content, [ContentType::Movies, ContentType::Gaming]);
    assert_eq!(args.viewing_time, Some(ViewingTime::Nighttime));
}

#[test]
fn test_parse_rejects_unknown_choice() {
    let result = Cli::try_parse_from(["picwiz", "resolve", "--brightness", "blinding"]);
    assert!(result.is_err());
}

#[test]
fn test_verbose_is_counted() {
    let cli = Cli::try_parse_from(["picwiz", "-vv", "steps"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert_eq!(Config::from_cli(&cli).verbosity, 2);
}

// =============================================================================
// RESOLVE COMMAND TESTS
// =============================================================================

#[test]
fn test_resolve_from_flags_text() {
    let args = ResolveArgs {
        content: vec![ContentType::Movies],
        viewing_time: Some(ViewingTime::Daytime),
        brightness: Some(BrightnessPreference::Bright),
        ..ResolveArgs::default()
    };
    let text = run_resolve(&text_config(), &args);
    assert!(text.starts_with("Cinema Vivid Mode\n"));
    assert!(text.contains("High Brightness"));
}

#[test]
fn test_resolve_json_reports_answers_and_profile() {
    let args = ResolveArgs {
        content: vec![ContentType::Gaming, ContentType::Sports],
        ..ResolveArgs::default()
    };
    let json: serde_json::Value = serde_json::from_str(&run_resolve(&json_config(), &args)).unwrap();
    assert_eq!(json["profile"]["name"], "Gaming & Sports Mode");
    assert_eq!(json["answers"]["content_types"], serde_json::json!(["sports", "gaming"]));
}

#[test]
fn test_resolve_with_nothing_answered_uses_general() {
    let json: serde_json::Value =
        serde_json::from_str(&run_resolve(&json_config(), &ResolveArgs::default())).unwrap();
    assert_eq!(json["profile"]["id"], "everyday-vivid");
}

#[test]
fn test_resolve_from_answers_file() {
    let temp = create_temp_dir();
    let path = create_answers_json(
        &temp,
        r#"{"content_types": ["sports"], "brightness_preference": "comfortable"}"#,
    );
    let args = ResolveArgs {
        answers: Some(path),
        ..ResolveArgs::default()
    };
    let text = run_resolve(&text_config(), &args);
    assert!(text.starts_with("Sports Night Mode\n"));
}

#[test]
fn test_flags_override_answers_file() {
    let temp = create_temp_dir();
    let path = create_answers_json(
        &temp,
        r#"{"content_types": ["general"], "color_preference": "natural"}"#,
    );
    let args = ResolveArgs {
        answers: Some(path),
        content: vec![ContentType::Movies],
        ..ResolveArgs::default()
    };
    let text = run_resolve(&text_config(), &args);
    assert!(text.starts_with("Cinema Vivid Mode\n"));
}

#[test]
fn test_resolve_missing_file_is_io_error() {
    let temp = create_temp_dir();
    let args = ResolveArgs {
        answers: Some(temp.path().join("missing.json")),
        ..ResolveArgs::default()
    };
    let result = cmd_resolve(&text_config(), &args, &mut Vec::new());
    assert!(matches!(result, Err(CliError::Io(_))));
}

#[test]
fn test_resolve_invalid_json() {
    let temp = create_temp_dir();
    let path = create_answers_json(&temp, "not valid json");
    let args = ResolveArgs {
        answers: Some(path),
        ..ResolveArgs::default()
    };
    let result = cmd_resolve(&text_config(), &args, &mut Vec::new());
    assert!(matches!(result, Err(CliError::Json(_))));
}

#[test]
fn test_answers_file_with_unknown_value_is_rejected() {
    let temp = create_temp_dir();
    let path = create_answers_json(&temp, r#"{"content_types": ["cartoons"]}"#);
    assert!(load_answers(&path).is_err());
}

// =============================================================================
// PROFILES / STEPS COMMAND TESTS
// =============================================================================

#[test]
fn test_profiles_lists_catalog() {
    let mut out = Vec::new();
    cmd_profiles(&text_config(), None, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 11);
    assert!(text.contains("entertainment-hub"));
}

#[test]
fn test_profiles_json_catalog() {
    let mut out = Vec::new();
    cmd_profiles(&json_config(), None, &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(11));
}

#[test]
fn test_profiles_show_by_name() {
    let mut out = Vec::new();
    cmd_profiles(&text_config(), Some("Everyday Comfort"), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Balanced settings for all-day viewing"));
}

#[test]
fn test_profiles_unknown_name() {
    let result = cmd_profiles(&text_config(), Some("turbo"), &mut Vec::new());
    assert!(matches!(result, Err(CliError::Parse(_))));
}

#[test]
fn test_steps_json() {
    let mut out = Vec::new();
    cmd_steps(&json_config(), &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json[0]["name"], "welcome");
    assert_eq!(json[6]["name"], "results");
    assert_eq!(json[1]["question"], true);
}

#[test]
fn test_execute_dispatches_steps() {
    let cli = Cli::try_parse_from(["picwiz", "steps"]).unwrap();
    let mut out = Vec::new();
    execute(&cli, &text_config(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 7);
}

// =============================================================================
// INTERACTIVE RUN TESTS
// =============================================================================

#[test]
fn test_run_full_session_json() {
    let mut prompter = ScriptedPrompter::new([
        Reply::Confirm(true),
        Reply::MultiSelect(Some(vec![3])),
        Reply::Select(Some(2)),
        Reply::Select(Some(1)),
        Reply::Select(Some(1)),
        Reply::Select(Some(0)),
        Reply::Confirm(false),
    ]);
    let mut out = Vec::new();
    let summary = cmd_run_with(&json_config(), &mut prompter, &mut out).unwrap();

    assert_eq!(summary.last(), Some(ProfileId::EverydayComfort));
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["profile"]["name"], "Everyday Comfort");
    assert_eq!(json["answers"]["viewing_time"], "both");
    assert_eq!(json["abandoned"], false);
}

#[test]
fn test_run_abandoned_reports_no_profile() {
    let mut prompter = ScriptedPrompter::new([Reply::Confirm(false)]);
    let mut out = Vec::new();
    cmd_run_with(&json_config(), &mut prompter, &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(json["profile"].is_null());
    assert_eq!(json["abandoned"], true);
}

#[test]
fn test_run_report_after_start_over_matches_last_round() {
    // Finish a round, start over, then quit at the welcome screen.
    let mut prompter = ScriptedPrompter::new([
        Reply::Confirm(true),
        Reply::MultiSelect(Some(vec![2])),
        Reply::Select(Some(1)),
        Reply::Select(Some(0)),
        Reply::Select(Some(0)),
        Reply::Select(Some(0)),
        Reply::Confirm(true),
        Reply::Confirm(false),
    ]);
    let mut out = Vec::new();
    let summary = cmd_run_with(&json_config(), &mut prompter, &mut out).unwrap();
    assert!(summary.abandoned);
    assert_eq!(summary.last(), Some(ProfileId::GameZoneNight));

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let reported: Answers = serde_json::from_value(json["answers"].clone()).unwrap();
    assert_eq!(reported.content_types.len(), 1);
    assert_eq!(json["profile"]["name"], resolve_profile(&reported).name);
    assert_eq!(json["profile"]["name"], "Game Zone Night");
    assert_eq!(json["abandoned"], true);
}

#[test]
fn test_run_script_exhausted_is_error() {
    let mut prompter = ScriptedPrompter::new([Reply::Confirm(true)]);
    let result = cmd_run_with(&text_config(), &mut prompter, &mut Vec::new());
    assert!(matches!(result, Err(CliError::InvalidArgument(_))));
}
