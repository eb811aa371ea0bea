//! In-memory provider
//!
//! A seeded catalog standing in for a real source plugin: connects
//! instantly and answers fetches and substring search from memory. Useful
//! for the demo loop and for exercising the aggregator without any plugin
//! infrastructure.

use async_trait::async_trait;
use chorus_core::{
    Album, Artist, EntityRef, MusicProvider, Playlist, ProviderId, ProviderStatus, Result,
    SearchResult, Song,
};
use std::sync::Mutex;

/// Provider serving a fixed in-memory catalog
pub struct MemoryProvider {
    id: ProviderId,
    status: Mutex<ProviderStatus>,
    songs: Vec<Song>,
    albums: Vec<Album>,
    artists: Vec<Artist>,
    playlists: Vec<Playlist>,
}

impl MemoryProvider {
    /// Create an empty provider
    pub fn new(name: &str) -> Self {
        Self {
            id: ProviderId::new(name),
            status: Mutex::new(ProviderStatus::Disconnected),
            songs: Vec::new(),
            albums: Vec::new(),
            artists: Vec::new(),
            playlists: Vec::new(),
        }
    }

    /// Reference within this provider
    pub fn entity_ref(&self, reference: &str) -> EntityRef {
        EntityRef::new(self.id.clone(), reference)
    }

    /// Seed a song
    pub fn with_song(mut self, reference: &str, title: &str) -> Self {
        self.songs.push(Song::new(self.entity_ref(reference), title));
        self
    }

    /// Seed an artist
    pub fn with_artist(mut self, reference: &str, name: &str) -> Self {
        self.artists
            .push(Artist::new(self.entity_ref(reference), name));
        self
    }

    /// Seed an album
    pub fn with_album(mut self, reference: &str, title: &str) -> Self {
        self.albums
            .push(Album::new(self.entity_ref(reference), title));
        self
    }

    /// Seed a playlist referencing previously seeded songs
    pub fn with_playlist(mut self, reference: &str, name: &str, tracks: &[&str]) -> Self {
        let mut playlist = Playlist::new(self.entity_ref(reference), name);
        playlist.tracks = tracks.iter().map(|t| self.entity_ref(t)).collect();
        self.playlists.push(playlist);
        self
    }
}

#[async_trait]
impl MusicProvider for MemoryProvider {
    fn id(&self) -> ProviderId {
        self.id.clone()
    }

    fn status(&self) -> ProviderStatus {
        *self.status.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn connect(&self) -> Result<()> {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = ProviderStatus::Connected;
        Ok(())
    }

    async fn songs(&self) -> Result<Vec<Song>> {
        Ok(self.songs.clone())
    }

    async fn albums(&self) -> Result<Vec<Album>> {
        Ok(self.albums.clone())
    }

    async fn artists(&self) -> Result<Vec<Artist>> {
        Ok(self.artists.clone())
    }

    async fn playlists(&self) -> Result<Vec<Playlist>> {
        Ok(self.playlists.clone())
    }

    async fn search(&self, query: &str) -> Result<SearchResult> {
        let needle = query.to_lowercase();
        let mut result = SearchResult::new(query, self.id.clone());

        for song in &self.songs {
            if song.title.to_lowercase().contains(&needle) {
                result.songs.push(song.reference.clone());
            }
        }
        for artist in &self.artists {
            if artist.name.to_lowercase().contains(&needle) {
                result.artists.push(artist.reference.clone());
            }
        }
        for album in &self.albums {
            if album.title.to_lowercase().contains(&needle) {
                result.albums.push(album.reference.clone());
            }
        }
        for playlist in &self.playlists {
            if playlist.name.to_lowercase().contains(&needle) {
                result.playlists.push(playlist.reference.clone());
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MemoryProvider {
        MemoryProvider::new("local")
            .with_song("song:1", "First Light")
            .with_song("song:2", "Night Drive")
            .with_artist("artist:1", "The Lighthouse Band")
            .with_playlist("playlist:1", "Light Mix", &["song:1"])
    }

    #[tokio::test]
    async fn search_matches_across_kinds_case_insensitively() {
        let provider = provider();
        let result = provider.search("LIGHT").await.unwrap();

        assert_eq!(result.query, "LIGHT");
        assert_eq!(result.songs.len(), 1);
        assert_eq!(result.artists.len(), 1);
        assert_eq!(result.playlists.len(), 1);
    }

    #[tokio::test]
    async fn connect_flips_status() {
        let provider = provider();
        assert_eq!(provider.status(), ProviderStatus::Disconnected);
        provider.connect().await.unwrap();
        assert!(provider.status().is_connected());
    }
}
