//! CLI command handlers.
//!
//! This module contains the execution logic for each CLI command.
//! Extracted to enable comprehensive testing of command behavior.

use std::path::Path;
use std::process::ExitCode;

use super::output::{print_help, print_step_list, print_validation_ok, print_version};
use super::{Args, Command};
use crate::engine::Sequencer;
use crate::runner::{ConsoleHost, Player};
use crate::script::Script;

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Play {
            script_path,
            speed,
            quiet,
        } => play(script_path.as_deref(), speed, quiet),
        Command::Validate { script_path } => validate(&script_path),
        Command::Steps { script_path } => steps(script_path.as_deref()),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Load a script from a path, or the built-in tour when no path given.
fn load_script(path: Option<&Path>) -> Result<Script, ExitCode> {
    match path {
        None => Ok(Script::guided_tour()),
        Some(p) => Script::load(p).map_err(|e| {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }),
    }
}

/// Play a script through the wall-clock player.
fn play(path: Option<&Path>, speed: f64, quiet: bool) -> ExitCode {
    let script = match load_script(path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let player = match Player::new(speed) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let timing = script.timing();
    let mut host = ConsoleHost::new(script.clone());
    if quiet {
        host = host.quiet();
    }
    let mut seq = Sequencer::new(script, timing);

    match player.run(&mut seq, &mut host) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Validate a script file and report the result.
fn validate(path: &Path) -> ExitCode {
    match Script::load(path) {
        Ok(script) => {
            // Pacing overrides are validated alongside the steps.
            if let Err(e) = script.timing().validate_semantic() {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
            print_validation_ok(&script);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// List the step table of a script.
fn steps(path: Option<&Path>) -> ExitCode {
    match load_script(path) {
        Ok(script) => {
            print_step_list(&script);
            ExitCode::SUCCESS
        }
        Err(code) => code,
    }
}
