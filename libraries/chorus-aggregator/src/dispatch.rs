//! Update hand-off channel
//!
//! Notifications are delivered on aggregator threads, but rendering state is
//! owned by a single consumer loop. [`UpdateDispatcher`] is a
//! [`LocalCallback`] that forwards every notification into a channel;
//! [`UpdateStream`] is the consumer half the rendering loop drains. The
//! producer never touches rendering state, the consumer never blocks the
//! producer.

use crate::callback::LocalCallback;
use chorus_core::{Album, Artist, Playlist, ProviderId, SearchResult, Song};
use tokio::sync::mpsc;

/// One catalog notification, reified for the channel
#[derive(Debug, Clone)]
pub enum UpdateEvent {
    /// Songs changed or were newly discovered
    Songs(Vec<Song>),
    /// Albums changed or were newly discovered
    Albums(Vec<Album>),
    /// Playlists changed or were newly discovered
    Playlists(Vec<Playlist>),
    /// Artists changed or were newly discovered
    Artists(Vec<Artist>),
    /// A provider became ready
    ProviderConnected(ProviderId),
    /// Search batches arrived
    SearchResults(Vec<SearchResult>),
}

/// Producer half: forwards notifications into the channel
///
/// Register an `Arc<UpdateDispatcher>` with the aggregator; sends after the
/// consumer is gone are absorbed, so a torn-down rendering loop never turns
/// a late notification into an error.
pub struct UpdateDispatcher {
    tx: mpsc::UnboundedSender<UpdateEvent>,
}

/// Consumer half: drained by the rendering loop
pub struct UpdateStream {
    rx: mpsc::UnboundedReceiver<UpdateEvent>,
}

/// Create a connected dispatcher/stream pair
pub fn update_channel() -> (std::sync::Arc<UpdateDispatcher>, UpdateStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        std::sync::Arc::new(UpdateDispatcher { tx }),
        UpdateStream { rx },
    )
}

impl UpdateDispatcher {
    fn forward(&self, event: UpdateEvent) {
        // receiver dropped means the rendering loop is gone; nothing to do
        let _ = self.tx.send(event);
    }
}

impl LocalCallback for UpdateDispatcher {
    fn on_song_update(&self, songs: &[Song]) {
        self.forward(UpdateEvent::Songs(songs.to_vec()));
    }

    fn on_album_update(&self, albums: &[Album]) {
        self.forward(UpdateEvent::Albums(albums.to_vec()));
    }

    fn on_playlist_update(&self, playlists: &[Playlist]) {
        self.forward(UpdateEvent::Playlists(playlists.to_vec()));
    }

    fn on_artist_update(&self, artists: &[Artist]) {
        self.forward(UpdateEvent::Artists(artists.to_vec()));
    }

    fn on_provider_connected(&self, provider: &ProviderId) {
        self.forward(UpdateEvent::ProviderConnected(provider.clone()));
    }

    fn on_search_result(&self, results: &[SearchResult]) {
        self.forward(UpdateEvent::SearchResults(results.to_vec()));
    }
}

impl UpdateStream {
    /// Receive the next event, or `None` once all dispatchers are dropped
    pub async fn next(&mut self) -> Option<UpdateEvent> {
        self.rx.recv().await
    }

    /// Drain every event that is ready right now without waiting
    pub fn try_drain(&mut self) -> Vec<UpdateEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::EntityRef;

    fn song(id: &str) -> Song {
        Song::new(
            EntityRef::new(ProviderId::new("local"), id),
            format!("Song {id}"),
        )
    }

    #[tokio::test]
    async fn notifications_cross_the_channel_in_order() {
        let (dispatcher, mut stream) = update_channel();

        dispatcher.on_song_update(&[song("1")]);
        dispatcher.on_provider_connected(&ProviderId::new("local"));

        match stream.next().await {
            Some(UpdateEvent::Songs(songs)) => assert_eq!(songs.len(), 1),
            other => panic!("expected song batch, got {other:?}"),
        }
        assert!(matches!(
            stream.next().await,
            Some(UpdateEvent::ProviderConnected(_))
        ));
    }

    #[tokio::test]
    async fn send_after_consumer_drop_is_absorbed() {
        let (dispatcher, stream) = update_channel();
        drop(stream);

        // must not panic or error
        dispatcher.on_song_update(&[song("1")]);
    }

    #[tokio::test]
    async fn try_drain_returns_ready_events_only() {
        let (dispatcher, mut stream) = update_channel();
        dispatcher.on_song_update(&[song("1")]);
        dispatcher.on_song_update(&[song("2")]);

        assert_eq!(stream.try_drain().len(), 2);
        assert!(stream.try_drain().is_empty());
    }
}
