//! Playback state reported by the embedded player

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// State of the embedded player, as returned by `getPlayerState()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
    #[default]
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    VideoCued,
    /// A code this crate does not know about
    Unknown(i64),
}

impl PlaybackState {
    /// Map the player's numeric state code
    pub fn from_code(code: i64) -> Self {
        match code {
            -1 => Self::Unstarted,
            0 => Self::Ended,
            1 => Self::Playing,
            2 => Self::Paused,
            3 => Self::Buffering,
            5 => Self::VideoCued,
            other => Self::Unknown(other),
        }
    }

    /// Numeric state code understood by the player
    pub fn code(&self) -> i64 {
        match self {
            Self::Unstarted => -1,
            Self::Ended => 0,
            Self::Playing => 1,
            Self::Paused => 2,
            Self::Buffering => 3,
            Self::VideoCued => 5,
            Self::Unknown(code) => *code,
        }
    }
}

impl Serialize for PlaybackState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for PlaybackState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_code)
    }
}
