//! Duration updates driven by playback state changes

use super::YouTubePlayer;
use crate::{bridge::ScriptBridge, types::PlaybackState};
use std::time::Duration;
use tokio::sync::watch;

/// Yields the duration of the current video whenever the player starts playing
///
/// Consecutive identical durations are reported once. Created by
/// [`YouTubePlayer::duration_watcher`].
#[derive(Debug)]
pub struct DurationWatcher<'a, B> {
    player: &'a YouTubePlayer<B>,
    states: watch::Receiver<PlaybackState>,
    last: Option<Duration>,
}

impl<B: ScriptBridge> YouTubePlayer<B> {
    /// Watch the duration of the playing video
    ///
    /// `states` is fed by the host with the player's `onStateChange` events.
    /// The current state counts as the first change, so a player that is
    /// already playing reports its duration on the first [`DurationWatcher::next`].
    pub fn duration_watcher(
        &self,
        mut states: watch::Receiver<PlaybackState>,
    ) -> DurationWatcher<'_, B> {
        states.mark_changed();
        DurationWatcher {
            player: self,
            states,
            last: None,
        }
    }
}

impl<B: ScriptBridge> DurationWatcher<'_, B> {
    /// Wait for the next distinct duration
    ///
    /// Returns `None` once the state sender has been dropped.
    pub async fn next(&mut self) -> Option<Duration> {
        loop {
            self.states.changed().await.ok()?;
            if *self.states.borrow_and_update() != PlaybackState::Playing {
                continue;
            }

            match self.player.get_duration().await {
                Ok(duration) if self.last == Some(duration) => {}
                Ok(duration) => {
                    self.last = Some(duration);
                    return Some(duration);
                }
                Err(e) => tracing::warn!("Failed to fetch duration: {}", e),
            }
        }
    }

    /// Last duration returned by [`DurationWatcher::next`]
    pub fn last(&self) -> Option<Duration> {
        self.last
    }
}
