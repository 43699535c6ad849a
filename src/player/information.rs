//! Video information API
//!
//! Accessors for metadata of the currently loaded video and the
//! "stats for nerds" diagnostic overlay.

use super::YouTubePlayer;
use crate::{
    Result,
    bridge::{ScriptBridge, decode, decode_seconds},
    types::Information,
};
use std::time::Duration;

impl<B: ScriptBridge> YouTubePlayer<B> {
    /// Show "stats for nerds", the overlay with additional video information
    pub async fn show_stats_for_nerds(&self) -> Result<()> {
        self.evaluate(&self.function_script("showVideoInfo", &[]))
            .await
            .map(drop)
    }

    /// Hide "stats for nerds"
    pub async fn hide_stats_for_nerds(&self) -> Result<()> {
        self.evaluate(&self.function_script("hideVideoInfo", &[]))
            .await
            .map(drop)
    }

    /// Retrieve the player's information object
    pub async fn get_information(&self) -> Result<Information> {
        let value = self.evaluate(&self.property_script("playerInfo")).await?;
        decode(value)
    }

    /// Retrieve the duration of the currently playing video
    ///
    /// The player reports `0` until the video's metadata has loaded.
    pub async fn get_duration(&self) -> Result<Duration> {
        let value = self.evaluate(&self.function_script("getDuration", &[])).await?;
        decode_seconds(value)
    }

    /// Retrieve the YouTube.com URL of the currently loaded video
    pub async fn get_video_url(&self) -> Result<String> {
        let value = self.evaluate(&self.function_script("getVideoUrl", &[])).await?;
        decode(value)
    }

    /// Retrieve the embed code of the currently loaded video
    pub async fn get_video_embed_code(&self) -> Result<String> {
        let value = self
            .evaluate(&self.function_script("getVideoEmbedCode", &[]))
            .await?;
        decode(value)
    }
}
