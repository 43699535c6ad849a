//! Player information type definitions
//!
//! Mirrors the `playerInfo` object the iframe player keeps up to date.
//! Every field is optional because the player fills it in lazily.

use super::PlaybackState;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Snapshot of the embedded player's `playerInfo` object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Information {
    pub video_bytes_loaded: Option<f64>,
    pub video_bytes_total: Option<f64>,
    pub video_loaded_fraction: Option<f64>,
    pub video_start_bytes: Option<f64>,
    /// Video ids of the loaded playlist
    pub playlist: Option<Vec<String>>,
    pub playlist_index: Option<i64>,
    pub playlist_id: Option<String>,
    pub muted: Option<bool>,
    /// Volume between 0 and 100
    pub volume: Option<u8>,
    pub player_state: Option<PlaybackState>,
    pub playback_rate: Option<f64>,
    pub available_playback_rates: Option<Vec<f64>>,
    pub playback_quality: Option<String>,
    pub available_quality_levels: Option<Vec<String>>,
    /// Epoch milliseconds of the last `currentTime` update
    pub current_time_last_updated: Option<f64>,
    /// Elapsed seconds
    pub current_time: Option<f64>,
    pub media_reference_time: Option<f64>,
    /// Duration in seconds
    pub duration: Option<f64>,
    pub video_url: Option<String>,
    pub video_embed_code: Option<String>,
    pub video_data: Option<VideoData>,
}

/// Metadata of the loaded video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoData {
    pub video_id: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "isLive")]
    pub is_live: Option<bool>,
}

impl Information {
    /// Elapsed playback time
    pub fn current_time(&self) -> Option<Duration> {
        self.current_time.and_then(seconds)
    }

    /// Duration of the loaded video
    pub fn duration(&self) -> Option<Duration> {
        self.duration.and_then(seconds)
    }

    /// Id of the loaded video
    pub fn video_id(&self) -> Option<&str> {
        self.video_data.as_ref()?.video_id.as_deref()
    }
}

fn seconds(value: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_player_info() {
        let info: Information = serde_json::from_value(json!({
            "videoBytesLoaded": 1024,
            "videoLoadedFraction": 0.25,
            "muted": false,
            "volume": 80,
            "playerState": 1,
            "playbackRate": 1.5,
            "availablePlaybackRates": [0.5, 1, 1.5, 2],
            "availableQualityLevels": ["hd1080", "large", "auto"],
            "currentTime": 12.5,
            "duration": 212.061,
            "videoUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "videoData": {
                "video_id": "dQw4w9WgXcQ",
                "author": "Rick Astley",
                "title": "Never Gonna Give You Up",
                "isLive": false
            },
            "apiInterface": ["getDuration"]
        }))
        .unwrap();

        assert_eq!(info.video_bytes_loaded, Some(1024.0));
        assert_eq!(info.volume, Some(80));
        assert_eq!(info.player_state, Some(PlaybackState::Playing));
        assert_eq!(info.available_playback_rates.as_ref().map(Vec::len), Some(4));
        assert_eq!(info.video_id(), Some("dQw4w9WgXcQ"));
        assert_eq!(info.current_time(), Some(Duration::from_millis(12_500)));
        assert_eq!(info.duration(), Some(Duration::from_secs_f64(212.061)));
        assert_eq!(info.video_data.unwrap().is_live, Some(false));
    }

    #[test]
    fn test_empty_object() {
        let info: Information = serde_json::from_value(json!({})).unwrap();
        assert_eq!(info, Information::default());
        assert_eq!(info.video_id(), None);
        assert_eq!(info.duration(), None);
    }

    #[test]
    fn test_negative_duration_is_none() {
        let info = Information {
            duration: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(info.duration(), None);
    }

    #[test]
    fn test_wrong_type_fails() {
        let result = serde_json::from_value::<Information>(json!({"muted": "yes"}));
        assert!(result.is_err());
    }
}
