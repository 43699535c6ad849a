//! Error type definitions
//!
//! Defines the main error types used by the player bindings.

use std::time::Duration;
use thiserror::Error;

/// Main error type for the player bindings
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The web view failed to evaluate a script against the player
    #[error("JavaScript evaluation failed for `{script}`: {reason}")]
    Evaluation { script: String, reason: String },

    /// The web view did not answer within the configured timeout
    #[error("JavaScript evaluation timed out after {}ms: `{script}`", .timeout.as_millis())]
    Timeout { script: String, timeout: Duration },

    /// The evaluation result could not be converted into the requested type
    #[error("Conversion to {target} failed: {reason}")]
    Conversion { target: &'static str, reason: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an evaluation error for the given script
    pub fn evaluation(script: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Evaluation {
            script: script.into(),
            reason: reason.into(),
        }
    }

    /// Create a timeout error for the given script
    pub fn timeout(script: impl Into<String>, timeout: Duration) -> Self {
        Self::Timeout {
            script: script.into(),
            timeout,
        }
    }

    /// Create a conversion error for the given target type
    pub fn conversion(target: &'static str, reason: impl Into<String>) -> Self {
        Self::Conversion {
            target,
            reason: reason.into(),
        }
    }

    /// Whether the error originated in the web view rather than in decoding
    pub fn is_bridge_failure(&self) -> bool {
        matches!(self, Self::Evaluation { .. } | Self::Timeout { .. })
    }
}
