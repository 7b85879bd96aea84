//! Wall-clock playback.
//!
//! The engine itself never sleeps; this module maps virtual deadlines to
//! real time. [`Player`] pumps a [`Sequencer`] by sleeping until the next
//! timer is due, and cancels the run on any key press, mirroring how the
//! original application stops the tutorial on user activity.
//! [`ConsoleHost`] renders the simulated typing to stdout.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Stylize;
use crossterm::terminal;

use crate::engine::{Sequencer, TerminalHost};
use crate::error::{TutorError, TutorResult};
use crate::script::Script;

/// Wall-clock driver for a sequencer.
///
/// `speed` scales real-time pacing without touching virtual time, so a
/// run at any speed fires exactly the same callback sequence.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    speed: f64,
}

impl Player {
    /// Create a player with the given speed factor.
    ///
    /// # Errors
    ///
    /// Returns error unless `speed` is finite and positive.
    pub fn new(speed: f64) -> TutorResult<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(TutorError::config(format!(
                "Playback speed must be finite and positive, got {speed}"
            )));
        }
        Ok(Self { speed })
    }

    /// The configured speed factor.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Real-time wait for a virtual duration at this speed.
    #[must_use]
    pub fn scaled_timeout(&self, virtual_ms: u64) -> Duration {
        Duration::from_secs_f64(virtual_ms as f64 / 1000.0 / self.speed)
    }

    /// Run the sequencer to completion against wall time.
    ///
    /// The terminal is put into raw mode for the duration so that a
    /// single key press cancels playback immediately.
    ///
    /// # Errors
    ///
    /// Returns error if the terminal cannot be configured or polled.
    pub fn run<H: TerminalHost>(&self, seq: &mut Sequencer, host: &mut H) -> TutorResult<()> {
        terminal::enable_raw_mode()?;
        let result = self.drive(seq, host);
        let _ = terminal::disable_raw_mode();
        result
    }

    fn drive<H: TerminalHost>(&self, seq: &mut Sequencer, host: &mut H) -> TutorResult<()> {
        seq.start(host);

        while seq.is_running() {
            let Some(deadline) = seq.next_deadline() else {
                break;
            };
            let wait_ms = deadline.saturating_sub(seq.now()).as_millis();

            if event::poll(self.scaled_timeout(wait_ms))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        // User activity cancels the tutorial.
                        seq.stop(host);
                        break;
                    }
                    _ => {}
                }
            } else {
                seq.advance(host, wait_ms);
            }
        }

        Ok(())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

/// Terminal host that renders playback to stdout.
///
/// Holds its own copy of the script so it can show each step's narration
/// alongside the typed command. Render failures are swallowed: the host
/// seam is infallible by contract.
#[derive(Debug)]
pub struct ConsoleHost {
    script: Script,
    quiet: bool,
}

impl ConsoleHost {
    /// Create a console host for the given script.
    #[must_use]
    pub fn new(script: Script) -> Self {
        Self {
            script,
            quiet: false,
        }
    }

    /// Suppress narration, showing only typed commands.
    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    fn print(&self, text: &str) {
        // Raw mode needs explicit carriage returns.
        let mut out = io::stdout();
        let _ = write!(out, "{}", text.replace('\n', "\r\n"));
        let _ = out.flush();
    }
}

impl TerminalHost for ConsoleHost {
    fn on_type_start(&mut self) {}

    fn on_type_complete(&mut self) {}

    fn on_input_change(&mut self, input: &str) {
        let mut out = io::stdout();
        let _ = crossterm::execute!(
            out,
            crossterm::cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::CurrentLine)
        );
        let _ = write!(out, "{} {input}", "$".green().bold());
        let _ = out.flush();
    }

    fn on_execute_command(&mut self, command: &str) {
        self.print(&format!("\n{}\n", format!("[run] {command}").dark_grey()));
    }

    fn on_step_change(&mut self, index: usize) {
        if self.quiet {
            return;
        }
        if let Some(step) = self.script.get(index) {
            let header = format!("step {}/{}", index + 1, self.script.len());
            self.print(&format!("\n{}  {}\n", header.cyan().bold(), step.message));
            if !step.tip.is_empty() {
                self.print(&format!("{}\n", format!("tip: {}", step.tip).dark_grey()));
            }
        }
    }

    fn on_tutorial_complete(&mut self) {
        self.print(&format!("\n{}\n", "tutorial complete".green().bold()));
    }
}
