//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
#[allow(dead_code)]
pub mod helpers {
    use async_trait::async_trait;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use yt_player_bridge::{Error, JavaScript, Result, ScriptBridge, Settings};

    /// Fake web view answering scripts from a lookup table
    #[derive(Debug, Default)]
    pub struct FakeWebView {
        answers: HashMap<String, Value>,
        failures: HashMap<String, String>,
        delay: Option<Duration>,
        evaluated: Mutex<Vec<String>>,
    }

    impl FakeWebView {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer `script` with `value`
        pub fn answer(mut self, script: &str, value: Value) -> Self {
            self.answers.insert(script.to_string(), value);
            self
        }

        /// Fail `script` with a JavaScript error
        pub fn fail(mut self, script: &str, reason: &str) -> Self {
            self.failures.insert(script.to_string(), reason.to_string());
            self
        }

        /// Delay every answer
        pub fn slow(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        /// Scripts evaluated so far, in order
        pub fn evaluated(&self) -> Vec<String> {
            self.evaluated.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ScriptBridge for FakeWebView {
        async fn evaluate(&self, script: &JavaScript) -> Result<Value> {
            self.evaluated.lock().unwrap().push(script.to_string());

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            if let Some(reason) = self.failures.get(script.as_str()) {
                return Err(Error::evaluation(script.as_str(), reason.clone()));
            }

            // Unknown expressions evaluate to `undefined`
            Ok(self
                .answers
                .get(script.as_str())
                .cloned()
                .unwrap_or(Value::Null))
        }
    }

    /// Create test settings with a custom evaluation timeout
    pub fn create_test_settings(timeout_ms: u64) -> Settings {
        let mut settings = Settings::default();
        settings.bridge.evaluation_timeout_ms = timeout_ms;
        settings
    }
}
