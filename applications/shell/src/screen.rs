//! Library screen state
//!
//! The consumer side of the update channel: a screen owns what is currently
//! displayed, drains [`UpdateEvent`]s on its own loop, and applies each batch
//! idempotently. Updates never touch the screen from the producing thread.

use crate::rows::LibraryRow;
use chorus_aggregator::{ProviderAggregator, SearchSession, UpdateEvent};
use chorus_core::{EntityRef, ProviderId, Song};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// What the screen wants done after applying an event
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenUpdate {
    /// Nothing displayed was affected
    None,
    /// Displayed content changed; re-render
    Redraw,
    /// A deferred search should be issued now that a provider is ready
    ReissueSearch(String),
}

/// State behind one rendered library/search screen
pub struct LibraryScreen {
    aggregator: Arc<ProviderAggregator>,

    /// Rows currently displayed
    rows: Vec<LibraryRow>,

    /// Resolved track lists for displayed playlists, re-fetched on update
    playlist_tracks: HashMap<EntityRef, Vec<Song>>,

    /// Last-query-wins search state
    search: SearchSession,

    /// Query waiting for a provider to become ready
    deferred_query: Option<String>,

    /// Providers known to be ready
    connected: Vec<ProviderId>,
}

impl LibraryScreen {
    /// Create an empty screen resolving references through `aggregator`
    pub fn new(aggregator: Arc<ProviderAggregator>) -> Self {
        Self {
            aggregator,
            rows: Vec::new(),
            playlist_tracks: HashMap::new(),
            search: SearchSession::new(),
            deferred_query: None,
            connected: Vec::new(),
        }
    }

    /// Replace the displayed rows
    ///
    /// Resolves and caches track lists for any displayed playlists.
    pub fn set_rows(&mut self, rows: Vec<LibraryRow>) {
        self.playlist_tracks.clear();
        for row in &rows {
            if let LibraryRow::Playlist(playlist) = row {
                self.cache_playlist_tracks(&playlist.reference, &playlist.tracks);
            }
        }
        self.rows = rows;
    }

    /// Rows currently displayed
    pub fn rows(&self) -> &[LibraryRow] {
        &self.rows
    }

    /// Whether an entity with this reference is currently displayed
    pub fn displays(&self, reference: &EntityRef) -> bool {
        self.rows.iter().any(|row| row.reference() == reference)
    }

    /// Cached resolved tracks for a displayed playlist
    pub fn playlist_tracks(&self, reference: &EntityRef) -> Option<&[Song]> {
        self.playlist_tracks.get(reference).map(Vec::as_slice)
    }

    /// The search session backing this screen
    pub fn search(&self) -> &SearchSession {
        &self.search
    }

    /// Issue a search, or defer it until a provider is ready
    ///
    /// Returns the query to send now, if any provider is connected; otherwise
    /// remembers it and [`apply`](Self::apply) surfaces it as
    /// [`ScreenUpdate::ReissueSearch`] on the next provider-connected event.
    pub fn begin_search(&mut self, query: impl Into<String>) -> Option<String> {
        let query = query.into();
        self.search.begin(query.clone());
        if self.connected.is_empty() {
            debug!(query, "no provider ready, deferring search");
            self.deferred_query = Some(query);
            None
        } else {
            self.deferred_query = None;
            Some(query)
        }
    }

    /// Apply one update event to the displayed state
    ///
    /// Batches are treated as "these entities may have changed": a displayed
    /// entity present in the batch is replaced in place, anything else is
    /// ignored. Applying the same event twice leaves the same state behind.
    pub fn apply(&mut self, event: &UpdateEvent) -> ScreenUpdate {
        match event {
            UpdateEvent::Songs(songs) => {
                let mut touched = false;
                for song in songs {
                    touched |= self.replace_row(&song.reference, || LibraryRow::Song(song.clone()));
                }
                redraw_if(touched)
            }
            UpdateEvent::Albums(albums) => {
                let mut touched = false;
                for album in albums {
                    touched |=
                        self.replace_row(&album.reference, || LibraryRow::Album(album.clone()));
                }
                redraw_if(touched)
            }
            UpdateEvent::Artists(artists) => {
                let mut touched = false;
                for artist in artists {
                    touched |=
                        self.replace_row(&artist.reference, || LibraryRow::Artist(artist.clone()));
                }
                redraw_if(touched)
            }
            UpdateEvent::Playlists(playlists) => {
                let mut touched = false;
                for playlist in playlists {
                    let displayed = self.replace_row(&playlist.reference, || {
                        LibraryRow::Playlist(playlist.clone())
                    });
                    if displayed {
                        // cached track list is stale; re-resolve
                        self.cache_playlist_tracks(&playlist.reference, &playlist.tracks);
                        touched = true;
                    }
                }
                redraw_if(touched)
            }
            UpdateEvent::ProviderConnected(provider) => {
                if !self.connected.contains(provider) {
                    self.connected.push(provider.clone());
                }
                match self.deferred_query.take() {
                    Some(query) => ScreenUpdate::ReissueSearch(query),
                    None => ScreenUpdate::None,
                }
            }
            UpdateEvent::SearchResults(results) => {
                let mut accepted = false;
                for result in results {
                    accepted |= self.search.accept(result);
                }
                redraw_if(accepted)
            }
        }
    }

    fn replace_row(&mut self, reference: &EntityRef, make: impl Fn() -> LibraryRow) -> bool {
        let mut touched = false;
        for row in &mut self.rows {
            if row.reference() == reference {
                *row = make();
                touched = true;
            }
        }
        touched
    }

    fn cache_playlist_tracks(&mut self, reference: &EntityRef, tracks: &[EntityRef]) {
        let resolved: Vec<Song> = tracks
            .iter()
            .filter_map(|r| self.aggregator.retrieve_song(r))
            .collect();
        self.playlist_tracks.insert(reference.clone(), resolved);
    }
}

fn redraw_if(touched: bool) -> ScreenUpdate {
    if touched {
        ScreenUpdate::Redraw
    } else {
        ScreenUpdate::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::{Playlist, ProviderId};

    fn reference(id: &str) -> EntityRef {
        EntityRef::new(ProviderId::new("local"), id)
    }

    fn song(id: &str, title: &str) -> Song {
        Song::new(reference(id), title)
    }

    fn screen_with_songs(songs: &[Song]) -> LibraryScreen {
        let mut screen = LibraryScreen::new(Arc::new(ProviderAggregator::new()));
        screen.set_rows(songs.iter().cloned().map(LibraryRow::Song).collect());
        screen
    }

    #[test]
    fn containment_is_exact() {
        let displayed = [song("song:1", "First"), song("song:2", "Second")];
        let screen = screen_with_songs(&displayed);

        // displayed entities present in a batch are reported, others not
        assert!(screen.displays(&reference("song:1")));
        assert!(screen.displays(&reference("song:2")));
        assert!(!screen.displays(&reference("song:3")));
    }

    #[test]
    fn batch_with_displayed_entity_redraws_and_updates_in_place() {
        let mut screen = screen_with_songs(&[song("song:1", "First")]);

        let update = UpdateEvent::Songs(vec![song("song:1", "First (Remaster)")]);
        assert_eq!(screen.apply(&update), ScreenUpdate::Redraw);
        assert_eq!(screen.rows()[0].label(), "First (Remaster)");

        // idempotent: same batch again leaves identical state
        screen.apply(&update);
        assert_eq!(screen.rows().len(), 1);
        assert_eq!(screen.rows()[0].label(), "First (Remaster)");
    }

    #[test]
    fn batch_without_displayed_entities_is_ignored() {
        let mut screen = screen_with_songs(&[song("song:1", "First")]);
        let update = UpdateEvent::Songs(vec![song("song:9", "Elsewhere")]);
        assert_eq!(screen.apply(&update), ScreenUpdate::None);
        assert_eq!(screen.rows()[0].label(), "First");
    }

    #[test]
    fn playlist_update_refreshes_cached_track_list() {
        let aggregator = Arc::new(ProviderAggregator::new());
        aggregator.ingest_songs(vec![song("song:1", "First"), song("song:2", "Second")]);

        let mut playlist = Playlist::new(reference("playlist:1"), "Mix");
        playlist.tracks = vec![reference("song:1")];

        let mut screen = LibraryScreen::new(aggregator);
        screen.set_rows(vec![LibraryRow::Playlist(playlist.clone())]);
        assert_eq!(screen.playlist_tracks(&playlist.reference).unwrap().len(), 1);

        // the playlist gained a track upstream
        playlist.tracks.push(reference("song:2"));
        let update = UpdateEvent::Playlists(vec![playlist.clone()]);
        assert_eq!(screen.apply(&update), ScreenUpdate::Redraw);
        assert_eq!(screen.playlist_tracks(&playlist.reference).unwrap().len(), 2);
    }

    #[test]
    fn deferred_search_is_reissued_on_provider_connect() {
        let mut screen = LibraryScreen::new(Arc::new(ProviderAggregator::new()));

        assert_eq!(screen.begin_search("light"), None);
        let update = UpdateEvent::ProviderConnected(ProviderId::new("local"));
        assert_eq!(
            screen.apply(&update),
            ScreenUpdate::ReissueSearch("light".into())
        );

        // once connected, new searches go out immediately
        assert_eq!(screen.begin_search("moon"), Some("moon".into()));
    }

    #[test]
    fn stale_search_results_do_not_redraw() {
        let mut screen = LibraryScreen::new(Arc::new(ProviderAggregator::new()));
        screen.connected.push(ProviderId::new("local"));
        screen.begin_search("beta");

        let mut stale = chorus_core::SearchResult::new("alpha", ProviderId::new("local"));
        stale.songs.push(reference("song:1"));
        let update = UpdateEvent::SearchResults(vec![stale]);
        assert_eq!(screen.apply(&update), ScreenUpdate::None);
        assert!(screen.search().is_empty());
    }
}
