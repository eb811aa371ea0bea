//! Local callback contract
//!
//! The notification surface any interested component implements to react to
//! catalog changes without polling. All methods are one-way: no return value
//! and no error channel. A provider that fails internally simply stops
//! emitting updates for the affected scope, so receivers cannot distinguish
//! "no change" from "upstream failure" through this interface.

use chorus_core::{Album, Artist, Playlist, ProviderId, SearchResult, Song};

/// Observer contract for aggregated catalog updates
///
/// Every method has a no-op default so observers implement only the scopes
/// they display.
///
/// # Delivery
///
/// Notifications arrive on whatever thread the aggregator chooses; never
/// assume the delivering thread owns rendering state. Batches carry only the
/// entities that changed, may be partial, and may be delivered more than
/// once; treat each as "these entities may have changed, re-render if
/// displayed" and keep the reaction idempotent.
///
/// Implementations must not call back into the registry that is delivering
/// to them (register/unregister from inside a notification deadlocks).
/// Marshal follow-up work through an update channel instead.
pub trait LocalCallback: Send + Sync {
    /// One or more songs changed or were newly discovered
    fn on_song_update(&self, songs: &[Song]) {
        let _ = songs;
    }

    /// One or more albums changed or were newly discovered
    fn on_album_update(&self, albums: &[Album]) {
        let _ = albums;
    }

    /// One or more playlists changed or were newly discovered
    ///
    /// Receivers that cache a playlist's resolved track list must invalidate
    /// and re-fetch it here.
    fn on_playlist_update(&self, playlists: &[Playlist]) {
        let _ = playlists;
    }

    /// One or more artists changed or were newly discovered
    fn on_artist_update(&self, artists: &[Artist]) {
        let _ = artists;
    }

    /// A provider transitioned from disconnected to connected
    ///
    /// Emitted once per transition. Receivers that deferred queries until a
    /// provider was ready should (re)issue them now.
    fn on_provider_connected(&self, provider: &ProviderId) {
        let _ = provider;
    }

    /// A previously issued search query produced results
    ///
    /// Each batch is tagged with its originating query. Receivers must
    /// compare the tag against the query they last issued and discard stale
    /// batches; see [`SearchSession`](crate::SearchSession).
    fn on_search_result(&self, results: &[SearchResult]) {
        let _ = results;
    }
}
