//! Error handling for the player bindings
//!
//! This module defines error types and handling patterns used throughout the crate.
//! URL resolution never produces an error; an unrecognized URL is simply `None`.

pub mod types;

pub use types::{Error, Result};
