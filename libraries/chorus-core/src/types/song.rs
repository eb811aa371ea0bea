/// Song domain type
use crate::types::EntityRef;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A song in the aggregated catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Reference uniquely naming this song
    pub reference: EntityRef,

    /// Song title
    pub title: String,

    /// Reference to the artist, if known
    pub artist: Option<EntityRef>,

    /// Reference to the album, if known
    pub album: Option<EntityRef>,

    /// Duration in milliseconds
    pub duration_ms: Option<u64>,

    /// Release year
    pub year: Option<u32>,

    /// Art reference (provider-resolvable image key)
    pub art: Option<String>,

    /// Whether the song is currently playable
    ///
    /// Providers may surface songs whose media is offline or not yet synced.
    pub available: bool,
}

impl Song {
    /// Create a new song with minimal metadata
    pub fn new(reference: EntityRef, title: impl Into<String>) -> Self {
        Self {
            reference,
            title: title.into(),
            artist: None,
            album: None,
            duration_ms: None,
            year: None,
            art: None,
            available: true,
        }
    }

    /// Get the song duration as a Duration
    pub fn duration(&self) -> Option<Duration> {
        self.duration_ms.map(Duration::from_millis)
    }

    /// Set the song duration from a Duration
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_ms = Some(duration.as_millis() as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProviderId;

    fn reference(id: &str) -> EntityRef {
        EntityRef::new(ProviderId::new("local"), id)
    }

    #[test]
    fn song_creation() {
        let song = Song::new(reference("song:1"), "Test Song");
        assert_eq!(song.title, "Test Song");
        assert!(song.artist.is_none());
        assert!(song.available);
    }

    #[test]
    fn song_duration_conversion() {
        let mut song = Song::new(reference("song:1"), "Song");
        song.set_duration(Duration::from_secs(180));

        assert_eq!(song.duration_ms, Some(180_000));
        assert_eq!(song.duration(), Some(Duration::from_secs(180)));
    }
}
