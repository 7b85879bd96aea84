//! # termtutor
//!
//! Deterministic scripted-tutorial playback engine for terminal hosts.
//!
//! A tutorial is a fixed, ordered script of terminal commands. The engine
//! replays the script into a host terminal with realistic typed-out pacing:
//! each step waits its configured delay, "types" its command one character
//! at a time, pauses, asks the host to execute the command, pauses again,
//! and advances. Stopping at any point cancels every outstanding timer as
//! a single batch and leaves the engine inert and reusable.
//!
//! The core engine is pure and clock-agnostic: it is driven by an explicit
//! virtual clock and an owned timer queue, so a full playback can run (and
//! be tested) without touching wall time. A wall-clock [`runner`] and a
//! small CLI sit on top for interactive use.
//!
//! ## Example
//!
//! ```rust
//! use termtutor::prelude::*;
//!
//! struct NullHost;
//! impl TerminalHost for NullHost {
//!     fn on_type_start(&mut self) {}
//!     fn on_type_complete(&mut self) {}
//!     fn on_input_change(&mut self, _input: &str) {}
//!     fn on_execute_command(&mut self, _command: &str) {}
//!     fn on_step_change(&mut self, _index: usize) {}
//!     fn on_tutorial_complete(&mut self) {}
//! }
//!
//! let mut seq = Sequencer::new(Script::guided_tour(), TimingConfig::default());
//! let mut host = NullHost;
//! seq.start(&mut host);
//! while seq.is_running() {
//!     seq.advance(&mut host, 50);
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod runner;
pub mod script;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{TimingConfig, TimingConfigBuilder};
    pub use crate::engine::{Phase, PlayTime, Sequencer, TerminalHost};
    pub use crate::error::{TutorError, TutorResult};
    pub use crate::runner::{ConsoleHost, Player};
    pub use crate::script::{Script, TutorialStep};
}

/// Re-export for public API
pub use error::{TutorError, TutorResult};
