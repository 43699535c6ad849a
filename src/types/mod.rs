//! Type definitions for the player bindings
//!
//! This module contains the value types exchanged with the embedded player.

pub mod information;
pub mod playback;
pub mod source;

pub use information::{Information, VideoData};
pub use playback::PlaybackState;
pub use source::Source;
