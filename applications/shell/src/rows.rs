//! Library row model
//!
//! Lists render a closed set of row kinds; activating a row dispatches
//! through an exhaustive match instead of downcasting a generic row object
//! at runtime.

use chorus_core::{Album, Artist, EntityRef, Playlist, Song};

/// One row in a rendered library or search list
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryRow {
    Song(Song),
    Album(Album),
    Artist(Artist),
    Playlist(Playlist),
}

/// What activating a row should do
#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    /// Start playing the song
    Play(Song),
    /// Navigate to the album detail screen
    OpenAlbum(EntityRef),
    /// Navigate to the artist detail screen
    OpenArtist(EntityRef),
    /// Navigate to the playlist detail screen
    OpenPlaylist(EntityRef),
}

impl LibraryRow {
    /// Reference of the entity the row displays
    pub fn reference(&self) -> &EntityRef {
        match self {
            Self::Song(song) => &song.reference,
            Self::Album(album) => &album.reference,
            Self::Artist(artist) => &artist.reference,
            Self::Playlist(playlist) => &playlist.reference,
        }
    }

    /// Primary display label
    pub fn label(&self) -> &str {
        match self {
            Self::Song(song) => &song.title,
            Self::Album(album) => &album.title,
            Self::Artist(artist) => &artist.name,
            Self::Playlist(playlist) => &playlist.name,
        }
    }

    /// Dispatch a click on this row
    pub fn activate(&self) -> RowAction {
        match self {
            Self::Song(song) => RowAction::Play(song.clone()),
            Self::Album(album) => RowAction::OpenAlbum(album.reference.clone()),
            Self::Artist(artist) => RowAction::OpenArtist(artist.reference.clone()),
            Self::Playlist(playlist) => RowAction::OpenPlaylist(playlist.reference.clone()),
        }
    }
}
