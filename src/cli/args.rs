//! CLI argument parsing.
//!
//! This module provides the argument parser for the termtutor CLI.
//! Extracted to enable comprehensive testing of argument parsing logic.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Play a tutorial script
    Play {
        /// Path to the script YAML file; `None` plays the built-in tour.
        script_path: Option<PathBuf>,
        /// Playback speed factor.
        speed: f64,
        /// Suppress narration.
        quiet: bool,
    },
    /// Validate a script file
    Validate {
        /// Path to the script YAML file.
        script_path: PathBuf,
    },
    /// List the step table of a script
    Steps {
        /// Path to the script YAML file; `None` lists the built-in tour.
        script_path: Option<PathBuf>,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "play" => Self::parse_play_command(args),
            "validate" => Self::parse_validate_command(args),
            "steps" => Self::parse_steps_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'play' command arguments.
    fn parse_play_command(args: &[String]) -> Command {
        let mut script_path = None;
        let mut speed = 1.0;
        let mut quiet = false;
        let mut tour = false;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--speed" => {
                    if i + 1 < args.len() {
                        if let Ok(s) = args[i + 1].parse() {
                            speed = s;
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--tour" => {
                    tour = true;
                    i += 1;
                }
                "-q" | "--quiet" => {
                    quiet = true;
                    i += 1;
                }
                other => {
                    if script_path.is_none() && !other.starts_with('-') {
                        script_path = Some(PathBuf::from(other));
                    }
                    i += 1;
                }
            }
        }

        if script_path.is_none() && !tour {
            eprintln!("Error: 'play' requires a script path or --tour");
            return Command::Help;
        }

        Command::Play {
            script_path,
            speed,
            quiet,
        }
    }

    /// Parse the 'validate' command arguments.
    fn parse_validate_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'validate' command requires a script path");
            return Command::Help;
        }

        Command::Validate {
            script_path: PathBuf::from(&args[2]),
        }
    }

    /// Parse the 'steps' command arguments.
    fn parse_steps_command(args: &[String]) -> Command {
        let script_path = args.get(2).map(PathBuf::from);
        Command::Steps { script_path }
    }
}
