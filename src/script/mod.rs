//! Tutorial scripts: the step table.
//!
//! A script is a fixed, ordered list of step descriptors. Steps are
//! defined at load time and never mutated; the sequencer only reads
//! them through an index cursor.
//!
//! Scripts load from YAML with schema validation:
//!
//! ```yaml
//! name: portfolio tour
//! steps:
//!   - command: help
//!     delay_ms: 500
//!     message: Let's see what this terminal can do.
//!     tip: Type 'help' anytime to list commands.
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::config::TimingConfig;
use crate::error::TutorResult;

/// One entry of a tutorial script.
///
/// Immutable once loaded. `command` is the literal text typed into and
/// executed by the host; `message` and `tip` are narration shown while
/// the step is current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TutorialStep {
    /// The literal text to be typed and then executed.
    #[validate(length(min = 1))]
    pub command: String,

    /// Milliseconds to wait after the step becomes current before typing
    /// begins.
    #[validate(range(max = 60_000))]
    #[serde(default)]
    pub delay_ms: u64,

    /// Narration shown while this step is current.
    #[serde(default)]
    pub message: String,

    /// Supplementary hint shown while this step is current.
    #[serde(default)]
    pub tip: String,
}

/// A fixed, ordered tutorial script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Script name, for display only.
    #[serde(default)]
    pub name: String,

    /// The ordered step table.
    #[validate(nested)]
    #[serde(default)]
    pub steps: Vec<TutorialStep>,

    /// Optional pacing override for this script.
    #[validate(nested)]
    #[serde(default)]
    pub timing: Option<TimingConfig>,
}

impl Script {
    /// Create a script from a step table.
    #[must_use]
    pub fn new(name: impl Into<String>, steps: Vec<TutorialStep>) -> Self {
        Self {
            name: name.into(),
            steps,
            timing: None,
        }
    }

    /// Load a script from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> TutorResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a script from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> TutorResult<Self> {
        let script: Self = serde_yaml::from_str(yaml)?;
        script.validate()?;
        Ok(script)
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the script has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TutorialStep> {
        self.steps.get(index)
    }

    /// Iterate over the step table in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TutorialStep> {
        self.steps.iter()
    }

    /// Pacing for this script: its own override, or the defaults.
    #[must_use]
    pub fn timing(&self) -> TimingConfig {
        self.timing.clone().unwrap_or_default()
    }

    /// Built-in demonstration script: a guided tour of a portfolio
    /// terminal.
    #[must_use]
    pub fn guided_tour() -> Self {
        let step = |command: &str, delay_ms: u64, message: &str, tip: &str| TutorialStep {
            command: command.to_string(),
            delay_ms,
            message: message.to_string(),
            tip: tip.to_string(),
        };

        Self::new(
            "guided tour",
            vec![
                step(
                    "help",
                    1000,
                    "Welcome! Let's start by listing every available command.",
                    "You can type 'help' yourself at any time.",
                ),
                step(
                    "about",
                    800,
                    "First, a short introduction.",
                    "The about page covers background and interests.",
                ),
                step(
                    "projects",
                    800,
                    "These are the featured projects.",
                    "Each project links to its repository.",
                ),
                step(
                    "skills",
                    800,
                    "A summary of languages and tools.",
                    "Grouped by how much they get used.",
                ),
                step(
                    "experience",
                    800,
                    "Work history, most recent first.",
                    "Dates are on the right.",
                ),
                step(
                    "contact",
                    800,
                    "How to get in touch.",
                    "Email is the fastest channel.",
                ),
                step(
                    "theme dark",
                    800,
                    "The terminal is themeable.",
                    "Try 'theme light' to switch back.",
                ),
                step(
                    "gui",
                    1000,
                    "Finally, there is a 3D world view.",
                    "Press ESC inside the world to return here.",
                ),
            ],
        )
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a TutorialStep;
    type IntoIter = std::slice::Iter<'a, TutorialStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
