//! Error types for termtutor.
//!
//! Playback itself is infallible: every sequencer operation is a local
//! state mutation or a host callback, and an out-of-range step cursor is
//! normal completion rather than a fault. Errors only arise at the edges,
//! when loading and validating scripts and configuration.

use thiserror::Error;

/// Result type alias for termtutor operations.
pub type TutorResult<T> = Result<T, TutorError>;

/// Unified error type for all termtutor operations.
#[derive(Debug, Error)]
pub enum TutorError {
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TutorError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config() {
        let err = TutorError::config("speed must be positive");
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("speed must be positive"));
    }

    #[test]
    fn test_error_io_display() {
        let err = TutorError::Io(std::io::Error::other("missing script"));
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("missing script"));
    }

    #[test]
    fn test_error_yaml_parse_display() {
        let parse = serde_yaml::from_str::<Vec<u64>>("not: a: list");
        if let Err(e) = parse {
            let err = TutorError::from(e);
            assert!(err.to_string().contains("YAML parsing error"));
        }
    }

    #[test]
    fn test_error_debug() {
        let err = TutorError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
