//! YouTube Player Bridge
//!
//! Typed bindings for a YouTube iframe player embedded in a host web view,
//! plus a resolver turning YouTube share/embed URLs into player sources.
//!
//! # Architecture
//!
//! The crate is made of two independent halves:
//! - **Source resolution**: [`resolver::resolve`] maps a URL string to a
//!   [`Source`] (video, playlist or channel). Pure and synchronous.
//! - **Player API**: [`YouTubePlayer`] evaluates JavaScript against the
//!   embedded player through a host-provided [`ScriptBridge`] and decodes
//!   the results into Rust types.
//!
//! # Usage
//!
//! ## Command line
//!
//! ```bash
//! yt-source "https://youtu.be/dQw4w9WgXcQ?t=42"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use yt_player_bridge::Source;
//!
//! let source = Source::from_url("https://www.youtube.com/embed/dQw4w9WgXcQ?t=15");
//! assert_eq!(source, Some(Source::video_at("dQw4w9WgXcQ", 15)));
//! ```

pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod player;
pub mod resolver;
pub mod types;
pub mod utils;

pub use bridge::{JavaScript, ScriptBridge};
pub use config::Settings;
pub use error::{Error, Result};
pub use player::{DurationWatcher, YouTubePlayer};
pub use types::{Information, PlaybackState, Source, VideoData};
