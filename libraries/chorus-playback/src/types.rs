//! Playback state types

use serde::{Deserialize, Serialize};

/// Transport state of the playback service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Nothing loaded
    Stopped,
    /// A track is loading or rebuffering
    Buffering,
    /// Audio is playing
    Playing,
    /// Audio is paused
    Paused,
}

impl PlaybackState {
    /// Whether a track is currently loaded (playing, paused, or buffering)
    pub fn has_track(self) -> bool {
        !matches!(self, Self::Stopped)
    }
}

/// How a listen-log entry came about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenKind {
    /// Playback of the track started
    Started,
    /// The track played to its end
    Finished,
    /// The user skipped away before the end
    Skipped,
}
