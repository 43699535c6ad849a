//! JavaScript expressions evaluated against the embedded player

use serde_json::Value;
use std::fmt;

/// A JavaScript snippet ready to be handed to a [`super::ScriptBridge`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaScript(String);

impl JavaScript {
    /// Wrap raw script text
    pub fn new(script: impl Into<String>) -> Self {
        Self(script.into())
    }

    /// `target.function(arg, ...);` with every argument JSON-encoded
    pub fn call(target: &str, function: &str, arguments: &[Value]) -> Self {
        let arguments = arguments
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Self(format!("{target}.{function}({arguments});"))
    }

    /// `target.property;`
    pub fn property(target: &str, property: &str) -> Self {
        Self(format!("{target}.{property};"))
    }

    /// The script text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JavaScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JavaScript {
    fn from(script: &str) -> Self {
        Self::new(script)
    }
}
