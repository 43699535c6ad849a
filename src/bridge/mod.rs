//! Script bridge between the host application and the embedded player
//!
//! The web view hosting the iframe player is owned by the host application.
//! This crate only needs one capability from it: evaluate a JavaScript
//! snippet and hand back the result as JSON. [`ScriptBridge`] captures that
//! capability so the player API can be driven by any web view binding, or by
//! a scripted fake in tests.

pub mod converter;
pub mod javascript;

pub use converter::{decode, decode_seconds};
pub use javascript::JavaScript;

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Evaluates JavaScript inside the web view that hosts the player
///
/// `undefined` and `null` results are reported as [`Value::Null`].
/// Script failures should be reported as [`crate::Error::Evaluation`].
#[async_trait]
pub trait ScriptBridge: Send + Sync {
    /// Evaluate `script` and return its JSON-encoded result
    async fn evaluate(&self, script: &JavaScript) -> Result<Value>;
}

#[async_trait]
impl<T: ScriptBridge + ?Sized> ScriptBridge for Arc<T> {
    async fn evaluate(&self, script: &JavaScript) -> Result<Value> {
        (**self).evaluate(script).await
    }
}

#[async_trait]
impl<T: ScriptBridge + ?Sized> ScriptBridge for Box<T> {
    async fn evaluate(&self, script: &JavaScript) -> Result<Value> {
        (**self).evaluate(script).await
    }
}
