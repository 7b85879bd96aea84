//! termtutor CLI - scripted terminal tutorial playback.

use std::process::ExitCode;

use termtutor::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
