/// Playlist domain type
use crate::types::EntityRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playlist
///
/// Carries an ordered sequence of song references. Observers that cache a
/// playlist's resolved track list must re-resolve it whenever the playlist is
/// included in an update batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Reference uniquely naming this playlist
    pub reference: EntityRef,

    /// Playlist name
    pub name: String,

    /// Ordered song references
    pub tracks: Vec<EntityRef>,

    /// Last modification timestamp, if the provider reports one
    pub updated_at: Option<DateTime<Utc>>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(reference: EntityRef, name: impl Into<String>) -> Self {
        Self {
            reference,
            name: name.into(),
            tracks: Vec::new(),
            updated_at: None,
        }
    }

    /// Number of tracks in the playlist
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
