//! Configuration management for the player bindings
//!
//! This module handles loading and managing configuration settings
//! for both the library and the `yt-source` binary.

pub mod loader;
pub mod settings;

pub use loader::{ConfigLoader, default_config_path};
pub use settings::Settings;
