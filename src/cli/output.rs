//! CLI output formatting.
//!
//! This module contains all output formatting functions for the CLI.
//! Extracted to enable testing of output generation.

use crate::script::Script;

/// Print version information.
pub fn print_version() {
    println!("termtutor {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"termtutor - Scripted terminal tutorial playback

USAGE:
    termtutor <COMMAND> [OPTIONS]

COMMANDS:
    play <script.yaml>          Play a tutorial script
        --tour                  Play the built-in guided tour instead
        --speed <F>             Playback speed factor (default: 1.0)
        -q, --quiet             Suppress narration

    validate <script.yaml>      Load and validate a script file

    steps [script.yaml]         List the step table (built-in tour if
                                no path is given)

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    termtutor play --tour
    termtutor play tours/portfolio.yaml --speed 2
    termtutor validate tours/portfolio.yaml
    termtutor steps

Any key press during playback cancels the tutorial.
"
    );
}

/// Format the step table of a script for display.
#[must_use]
pub fn format_step_list(script: &Script) -> String {
    let name = if script.name.is_empty() {
        "(unnamed)"
    } else {
        script.name.as_str()
    };
    let mut out = format!("{name}: {} step(s)\n", script.len());

    for (i, step) in script.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {:<16} +{}ms  {}\n",
            i + 1,
            step.command,
            step.delay_ms,
            step.message
        ));
    }

    out
}

/// Print the step table of a script.
pub fn print_step_list(script: &Script) {
    print!("{}", format_step_list(script));
}

/// Print a validation success report.
pub fn print_validation_ok(script: &Script) {
    println!("OK: {} step(s) valid", script.len());
}
