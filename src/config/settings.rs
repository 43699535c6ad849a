//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for the player bindings.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding [`PlayerSettings::variable_name`]
pub const ENV_PLAYER_VARIABLE: &str = "YT_PLAYER_VARIABLE";
/// Environment variable overriding [`BridgeSettings::evaluation_timeout_ms`]
pub const ENV_BRIDGE_TIMEOUT_MS: &str = "YT_BRIDGE_TIMEOUT_MS";
/// Environment variable overriding [`LoggingSettings::level`]
pub const ENV_LOG_LEVEL: &str = "YT_LOG_LEVEL";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Embedded player configuration
    pub player: PlayerSettings,
    /// Script bridge configuration
    pub bridge: BridgeSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Embedded player configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// JavaScript expression naming the player object inside the web view
    pub variable_name: String,
}

/// Script bridge configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    /// Upper bound for a single script evaluation, in milliseconds
    pub evaluation_timeout_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            variable_name: "player".to_string(),
        }
    }
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            evaluation_timeout_ms: 10_000,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl BridgeSettings {
    /// Evaluation timeout as a [`Duration`]
    pub fn evaluation_timeout(&self) -> Duration {
        Duration::from_millis(self.evaluation_timeout_ms)
    }
}

impl LoggingSettings {
    /// Effective filter directive, taking the verbose flag into account
    pub fn effective_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            self.level.as_str()
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    ///
    /// Missing sections and keys fall back to their defaults.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Override fields from environment variables
    pub fn merge_with_env(self) -> crate::Result<Self> {
        self.merge_with(|key| std::env::var(key).ok())
    }

    /// Override fields from an arbitrary variable lookup
    pub fn merge_with<F>(mut self, lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(variable_name) = lookup(ENV_PLAYER_VARIABLE) {
            self.player.variable_name = variable_name;
        }

        if let Some(timeout) = lookup(ENV_BRIDGE_TIMEOUT_MS) {
            self.bridge.evaluation_timeout_ms = timeout
                .trim()
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid timeout: {}", e)))?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level.trim().to_lowercase();
        }

        Ok(self)
    }

    /// Check that all values are usable
    pub fn validate(&self) -> crate::Result<()> {
        if !is_js_member_path(&self.player.variable_name) {
            return Err(crate::Error::config(format!(
                "Invalid player variable name: {:?}",
                self.player.variable_name
            )));
        }

        if self.bridge.evaluation_timeout_ms == 0 {
            return Err(crate::Error::config(
                "Evaluation timeout must be greater than zero",
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(crate::Error::config(format!(
                "Invalid log level: {:?} (expected one of {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// `player`, `window.player`, `_yt.$player` and so on
fn is_js_member_path(value: &str) -> bool {
    !value.is_empty()
        && value.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}
