//! # Player Module
//!
//! Typed access to an iframe player embedded in a host web view.
//!
//! [`YouTubePlayer`] turns each call into a JavaScript expression against the
//! player object, evaluates it through a [`ScriptBridge`] and decodes the
//! result. Every evaluation is bounded by the configured timeout.
//!
//! ## Examples
//!
//! ```rust
//! use async_trait::async_trait;
//! use serde_json::{Value, json};
//! use yt_player_bridge::{JavaScript, Result, ScriptBridge, Settings, YouTubePlayer};
//!
//! struct FixedDuration;
//!
//! #[async_trait]
//! impl ScriptBridge for FixedDuration {
//!     async fn evaluate(&self, _script: &JavaScript) -> Result<Value> {
//!         Ok(json!(212.5))
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let player = YouTubePlayer::new(FixedDuration, &Settings::default());
//! let duration = player.get_duration().await?;
//! assert_eq!(duration.as_millis(), 212_500);
//! # Ok::<(), yt_player_bridge::Error>(())
//! # });
//! ```

pub mod duration;
pub mod information;

pub use duration::DurationWatcher;

use crate::{
    Error, Result,
    bridge::{JavaScript, ScriptBridge},
    config::Settings,
};
use serde_json::Value;
use std::time::Duration;

/// Handle on an embedded player
#[derive(Debug)]
pub struct YouTubePlayer<B> {
    /// Bridge into the hosting web view
    bridge: B,
    /// JavaScript expression naming the player object
    variable_name: String,
    /// Upper bound for one evaluation
    evaluation_timeout: Duration,
}

impl<B: ScriptBridge> YouTubePlayer<B> {
    /// Create a player handle over `bridge`
    pub fn new(bridge: B, settings: &Settings) -> Self {
        Self {
            bridge,
            variable_name: settings.player.variable_name.clone(),
            evaluation_timeout: settings.bridge.evaluation_timeout(),
        }
    }

    /// The underlying bridge
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// JavaScript expression naming the player object
    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }

    /// Script calling `function` on the player object
    pub fn function_script(&self, function: &str, arguments: &[Value]) -> JavaScript {
        JavaScript::call(&self.variable_name, function, arguments)
    }

    /// Script reading `property` of the player object
    pub fn property_script(&self, property: &str) -> JavaScript {
        JavaScript::property(&self.variable_name, property)
    }

    /// Evaluate a script, bounded by the configured timeout
    pub async fn evaluate(&self, script: &JavaScript) -> Result<Value> {
        tracing::debug!("Evaluating `{}`", script);

        match tokio::time::timeout(self.evaluation_timeout, self.bridge.evaluate(script)).await {
            Ok(Ok(value)) => {
                tracing::trace!("`{}` returned {}", script, value);
                Ok(value)
            }
            Ok(Err(e)) => {
                tracing::debug!("`{}` failed: {}", script, e);
                Err(e)
            }
            Err(_) => Err(Error::timeout(script.as_str(), self.evaluation_timeout)),
        }
    }
}
