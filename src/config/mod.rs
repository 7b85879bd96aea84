//! Pacing configuration.
//!
//! Mistake-proofed through:
//! - Type-safe configuration structs
//! - Compile-time validation via serde
//! - Runtime semantic validation
//!
//! The defaults reproduce the reference pacing exactly: 100ms per typed
//! character, 800ms between typing completion and execution, 1000ms
//! between steps.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{TutorError, TutorResult};

/// Per-character typing cadence, milliseconds.
pub const DEFAULT_TYPE_TICK_MS: u64 = 100;
/// Pause between typing completion and command execution, milliseconds.
pub const DEFAULT_EXEC_PAUSE_MS: u64 = 800;
/// Pause after command execution before the next step, milliseconds.
pub const DEFAULT_STEP_PAUSE_MS: u64 = 1000;

/// Playback pacing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TimingConfig {
    /// Milliseconds between typed characters.
    #[validate(range(min = 1, max = 10_000))]
    #[serde(default = "default_type_tick")]
    pub type_tick_ms: u64,

    /// Milliseconds between typing completion and command execution.
    #[validate(range(max = 60_000))]
    #[serde(default = "default_exec_pause")]
    pub exec_pause_ms: u64,

    /// Milliseconds after command execution before the next step.
    #[validate(range(max = 60_000))]
    #[serde(default = "default_step_pause")]
    pub step_pause_ms: u64,
}

fn default_type_tick() -> u64 {
    DEFAULT_TYPE_TICK_MS
}

fn default_exec_pause() -> u64 {
    DEFAULT_EXEC_PAUSE_MS
}

fn default_step_pause() -> u64 {
    DEFAULT_STEP_PAUSE_MS
}

impl TimingConfig {
    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> TutorResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> TimingConfigBuilder {
        TimingConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    ///
    /// # Errors
    ///
    /// Returns error if the cadence is zero.
    pub fn validate_semantic(&self) -> TutorResult<()> {
        if self.type_tick_ms == 0 {
            return Err(TutorError::config("Typing cadence must be positive"));
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            type_tick_ms: DEFAULT_TYPE_TICK_MS,
            exec_pause_ms: DEFAULT_EXEC_PAUSE_MS,
            step_pause_ms: DEFAULT_STEP_PAUSE_MS,
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct TimingConfigBuilder {
    type_tick_ms: Option<u64>,
    exec_pause_ms: Option<u64>,
    step_pause_ms: Option<u64>,
}

impl TimingConfigBuilder {
    /// Set the per-character typing cadence in milliseconds.
    #[must_use]
    pub const fn type_tick_ms(mut self, ms: u64) -> Self {
        self.type_tick_ms = Some(ms);
        self
    }

    /// Set the pre-execution pause in milliseconds.
    #[must_use]
    pub const fn exec_pause_ms(mut self, ms: u64) -> Self {
        self.exec_pause_ms = Some(ms);
        self
    }

    /// Set the inter-step pause in milliseconds.
    #[must_use]
    pub const fn step_pause_ms(mut self, ms: u64) -> Self {
        self.step_pause_ms = Some(ms);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> TimingConfig {
        let mut config = TimingConfig::default();

        if let Some(ms) = self.type_tick_ms {
            config.type_tick_ms = ms;
        }
        if let Some(ms) = self.exec_pause_ms {
            config.exec_pause_ms = ms;
        }
        if let Some(ms) = self.step_pause_ms {
            config.step_pause_ms = ms;
        }

        config
    }
}
