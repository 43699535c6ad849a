//! Player source type definitions
//!
//! Defines what the embedded player should load: a video, a playlist or a channel.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The content an embedded player loads
///
/// Structural equality (`==`, `Hash`) compares every field, including the
/// start time of a video. Identity ([`Source::id`], [`Source::is_same_entity`])
/// ignores the start time: the same video opened at two different offsets is
/// the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Source {
    /// Video
    Video {
        id: String,
        /// Start offset in seconds
        #[serde(
            rename = "startTime",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        start_time: Option<u64>,
    },
    /// Playlist
    Playlist { id: String },
    /// Channel
    Channel { id: String },
}

impl Source {
    /// Create a video source starting at the beginning
    pub fn video(id: impl Into<String>) -> Self {
        Self::Video {
            id: id.into(),
            start_time: None,
        }
    }

    /// Create a video source starting at `start_time` seconds
    pub fn video_at(id: impl Into<String>, start_time: u64) -> Self {
        Self::Video {
            id: id.into(),
            start_time: Some(start_time),
        }
    }

    /// Create a playlist source
    pub fn playlist(id: impl Into<String>) -> Self {
        Self::Playlist { id: id.into() }
    }

    /// Create a channel source
    pub fn channel(id: impl Into<String>) -> Self {
        Self::Channel { id: id.into() }
    }

    /// Resolve a source from a URL string, see [`crate::resolver::resolve`]
    pub fn from_url(url: &str) -> Option<Self> {
        crate::resolver::resolve(url)
    }

    /// The stable identity of the entity associated with this source
    pub fn id(&self) -> &str {
        match self {
            Self::Video { id, .. } | Self::Playlist { id } | Self::Channel { id } => id,
        }
    }

    /// Start offset in seconds, only ever set for videos
    pub fn start_time(&self) -> Option<u64> {
        match self {
            Self::Video { start_time, .. } => *start_time,
            Self::Playlist { .. } | Self::Channel { .. } => None,
        }
    }

    /// Start offset as a [`Duration`]
    pub fn start_offset(&self) -> Option<Duration> {
        self.start_time().map(Duration::from_secs)
    }

    /// Variant name as it appears in the serialized `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Video { .. } => "video",
            Self::Playlist { .. } => "playlist",
            Self::Channel { .. } => "channel",
        }
    }

    /// Same variant and same identifier, start time ignored
    pub fn is_same_entity(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.id() == other.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_constructors() {
        assert_eq!(
            Source::video("abc"),
            Source::Video {
                id: "abc".to_string(),
                start_time: None
            }
        );
        assert_eq!(Source::video_at("abc", 42).start_time(), Some(42));
        assert_eq!(Source::playlist("PL1").id(), "PL1");
        assert_eq!(Source::channel("UC1").kind(), "channel");
    }

    #[test]
    fn test_id_ignores_start_time() {
        let early = Source::video_at("abc123", 10);
        let late = Source::video_at("abc123", 90);

        assert_eq!(early.id(), late.id());
        assert!(early.is_same_entity(&late));
        // Structural equality still tells them apart
        assert_ne!(early, late);
    }

    #[test]
    fn test_same_entity_requires_same_kind() {
        let video = Source::video("shared");
        let playlist = Source::playlist("shared");

        assert_eq!(video.id(), playlist.id());
        assert!(!video.is_same_entity(&playlist));
    }

    #[test]
    fn test_hash_is_structural() {
        let set: HashSet<Source> = [
            Source::video("a"),
            Source::video_at("a", 5),
            Source::video("a"),
            Source::channel("a"),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_start_offset() {
        assert_eq!(
            Source::video_at("a", 75).start_offset(),
            Some(Duration::from_secs(75))
        );
        assert_eq!(Source::playlist("p").start_offset(), None);
    }

    #[test]
    fn test_serialization_shape() {
        assert_eq!(
            serde_json::to_value(Source::video_at("abc", 42)).unwrap(),
            json!({"type": "video", "id": "abc", "startTime": 42})
        );
        assert_eq!(
            serde_json::to_value(Source::video("abc")).unwrap(),
            json!({"type": "video", "id": "abc"})
        );
        assert_eq!(
            serde_json::to_value(Source::playlist("PL1")).unwrap(),
            json!({"type": "playlist", "id": "PL1"})
        );
        assert_eq!(
            serde_json::to_value(Source::channel("UC1")).unwrap(),
            json!({"type": "channel", "id": "UC1"})
        );
    }

    #[test]
    fn test_deserialize_without_start_time() {
        let source: Source = serde_json::from_value(json!({"type": "video", "id": "xyz"})).unwrap();
        assert_eq!(source, Source::video("xyz"));

        let unknown = serde_json::from_value::<Source>(json!({"type": "short", "id": "xyz"}));
        assert!(unknown.is_err());
    }
}
