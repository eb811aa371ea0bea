//! Provider aggregation
//!
//! Merges entity updates from every registered provider into one catalog
//! cache and fans the changed subset out to registered observers.

use crate::callback::LocalCallback;
use crate::error::{AggregatorError, Result};
use crate::registry::{CallbackRegistry, Registration};
use chorus_core::{
    Album, Artist, EntityRef, MusicProvider, Playlist, ProviderId, Song,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock as StdRwLock};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Catalog cache, one map per entity scope
#[derive(Default)]
struct Catalog {
    songs: HashMap<EntityRef, Song>,
    albums: HashMap<EntityRef, Album>,
    artists: HashMap<EntityRef, Artist>,
    playlists: HashMap<EntityRef, Playlist>,
}

/// Merges provider catalogs and notifies observers of changes
///
/// Constructed explicitly by the composition root and shared via `Arc`;
/// there is no process-wide instance. Observers register with
/// [`add_update_callback`](Self::add_update_callback) (or the scoped variant)
/// while active and unregister before they become invalid.
///
/// Lookups ([`retrieve_song`](Self::retrieve_song) and friends) are
/// synchronous and return the current known entity or `None`; a miss is a
/// normal outcome (provider disconnected, entity removed), never an error.
pub struct ProviderAggregator {
    providers: RwLock<HashMap<ProviderId, Arc<dyn MusicProvider>>>,

    /// Providers that already emitted their connected event
    connected: Mutex<HashSet<ProviderId>>,

    /// Catalog cache; std lock so UI-thread lookups need no runtime
    catalog: StdRwLock<Catalog>,

    callbacks: Arc<CallbackRegistry<dyn LocalCallback>>,
}

impl ProviderAggregator {
    /// Create an aggregator with no providers and no observers
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(HashMap::new()),
            connected: Mutex::new(HashSet::new()),
            catalog: StdRwLock::new(Catalog::default()),
            callbacks: Arc::new(CallbackRegistry::new()),
        }
    }

    // ===== Observer registration =====

    /// Register an observer for catalog updates
    ///
    /// Idempotent; the registry holds only a weak handle, so the caller keeps
    /// ownership and must unregister before dropping the observer.
    pub fn add_update_callback(&self, observer: &Arc<dyn LocalCallback>) {
        self.callbacks.register(observer);
    }

    /// Unregister an observer; a no-op if it was never registered
    pub fn remove_update_callback(&self, observer: &Arc<dyn LocalCallback>) {
        self.callbacks.unregister(observer);
    }

    /// Register an observer for the lifetime of the returned guard
    pub fn scoped_callback(&self, observer: &Arc<dyn LocalCallback>) -> Registration<dyn LocalCallback> {
        self.callbacks.register_scoped(observer)
    }

    // ===== Provider bookkeeping =====

    /// Add a provider to the aggregated view
    ///
    /// The provider contributes nothing until
    /// [`connect_provider`](Self::connect_provider) succeeds.
    pub async fn register_provider(&self, provider: Arc<dyn MusicProvider>) {
        let id = provider.id();
        let mut providers = self.providers.write().await;
        if providers.insert(id.clone(), provider).is_some() {
            debug!(provider = %id, "provider re-registered, replacing handle");
        } else {
            info!(provider = %id, "provider registered");
        }
    }

    /// Remove a provider
    ///
    /// Cached entities from the provider remain retrievable until another
    /// sync replaces them; a later re-register emits a fresh connected event.
    pub async fn unregister_provider(&self, id: &ProviderId) {
        self.providers.write().await.remove(id);
        self.connected.lock().unwrap_or_else(|e| e.into_inner()).remove(id);
    }

    /// Connect a provider and perform its initial catalog sync
    ///
    /// Emits `on_provider_connected` exactly once per disconnected-to-connected
    /// transition, before the sync's update batches.
    pub async fn connect_provider(&self, id: &ProviderId) -> Result<()> {
        let provider = self
            .provider(id)
            .await
            .ok_or_else(|| AggregatorError::ProviderNotRegistered(id.clone()))?;

        provider
            .connect()
            .await
            .map_err(|e| AggregatorError::provider_failed(id.clone(), &e))?;

        let newly_connected = self
            .connected
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id.clone());

        if newly_connected {
            info!(provider = %id, "provider connected");
            self.callbacks.notify(|cb| cb.on_provider_connected(id));
        }

        self.sync_provider(id).await
    }

    /// Record that a provider dropped its connection
    ///
    /// A later [`connect_provider`](Self::connect_provider) emits the
    /// connected event again.
    pub async fn provider_disconnected(&self, id: &ProviderId) {
        let was_connected = self
            .connected
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(id);
        if was_connected {
            info!(provider = %id, "provider disconnected");
        }
    }

    async fn provider(&self, id: &ProviderId) -> Option<Arc<dyn MusicProvider>> {
        self.providers.read().await.get(id).cloned()
    }

    async fn connected_providers(&self) -> Vec<Arc<dyn MusicProvider>> {
        let connected = self
            .connected
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        self.providers
            .read()
            .await
            .values()
            .filter(|p| connected.contains(&p.id()))
            .cloned()
            .collect()
    }

    // ===== Catalog sync and ingestion =====

    /// Fetch a provider's catalog and merge it into the aggregated view
    ///
    /// Each scope is fetched independently; a failing scope is logged and
    /// skipped so the remaining scopes still update. Observers receive one
    /// batch per scope that actually changed.
    pub async fn sync_provider(&self, id: &ProviderId) -> Result<()> {
        let provider = self
            .provider(id)
            .await
            .ok_or_else(|| AggregatorError::ProviderNotRegistered(id.clone()))?;

        match provider.songs().await {
            Ok(songs) => self.ingest_songs(songs),
            Err(e) => warn!(provider = %id, error = %e, "song sync failed"),
        }
        match provider.albums().await {
            Ok(albums) => self.ingest_albums(albums),
            Err(e) => warn!(provider = %id, error = %e, "album sync failed"),
        }
        match provider.artists().await {
            Ok(artists) => self.ingest_artists(artists),
            Err(e) => warn!(provider = %id, error = %e, "artist sync failed"),
        }
        match provider.playlists().await {
            Ok(playlists) => self.ingest_playlists(playlists),
            Err(e) => warn!(provider = %id, error = %e, "playlist sync failed"),
        }

        Ok(())
    }

    /// Merge songs into the cache and notify observers of the changed subset
    ///
    /// Also the entry point for push-style providers that report changes on
    /// their own schedule instead of being polled.
    pub fn ingest_songs(&self, songs: Vec<Song>) {
        let mut changed = Vec::new();
        {
            let mut catalog = self.catalog.write().unwrap_or_else(|e| e.into_inner());
            for song in songs {
                if catalog.songs.get(&song.reference) != Some(&song) {
                    catalog.songs.insert(song.reference.clone(), song.clone());
                    changed.push(song);
                }
            }
        }

        if !changed.is_empty() {
            debug!(count = changed.len(), "song batch");
            self.callbacks.notify(|cb| cb.on_song_update(&changed));
        }
    }

    /// Merge albums into the cache and notify observers of the changed subset
    pub fn ingest_albums(&self, albums: Vec<Album>) {
        let mut changed = Vec::new();
        {
            let mut catalog = self.catalog.write().unwrap_or_else(|e| e.into_inner());
            for album in albums {
                if catalog.albums.get(&album.reference) != Some(&album) {
                    catalog.albums.insert(album.reference.clone(), album.clone());
                    changed.push(album);
                }
            }
        }

        if !changed.is_empty() {
            debug!(count = changed.len(), "album batch");
            self.callbacks.notify(|cb| cb.on_album_update(&changed));
        }
    }

    /// Merge artists into the cache and notify observers of the changed subset
    pub fn ingest_artists(&self, artists: Vec<Artist>) {
        let mut changed = Vec::new();
        {
            let mut catalog = self.catalog.write().unwrap_or_else(|e| e.into_inner());
            for artist in artists {
                if catalog.artists.get(&artist.reference) != Some(&artist) {
                    catalog.artists.insert(artist.reference.clone(), artist.clone());
                    changed.push(artist);
                }
            }
        }

        if !changed.is_empty() {
            debug!(count = changed.len(), "artist batch");
            self.callbacks.notify(|cb| cb.on_artist_update(&changed));
        }
    }

    /// Merge playlists into the cache and notify observers of the changed subset
    pub fn ingest_playlists(&self, playlists: Vec<Playlist>) {
        let mut changed = Vec::new();
        {
            let mut catalog = self.catalog.write().unwrap_or_else(|e| e.into_inner());
            for playlist in playlists {
                if catalog.playlists.get(&playlist.reference) != Some(&playlist) {
                    catalog
                        .playlists
                        .insert(playlist.reference.clone(), playlist.clone());
                    changed.push(playlist);
                }
            }
        }

        if !changed.is_empty() {
            debug!(count = changed.len(), "playlist batch");
            self.callbacks.notify(|cb| cb.on_playlist_update(&changed));
        }
    }

    // ===== Lookups =====

    /// Current known song for a reference, if any
    pub fn retrieve_song(&self, reference: &EntityRef) -> Option<Song> {
        self.catalog
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .songs
            .get(reference)
            .cloned()
    }

    /// Current known album for a reference, if any
    pub fn retrieve_album(&self, reference: &EntityRef) -> Option<Album> {
        self.catalog
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .albums
            .get(reference)
            .cloned()
    }

    /// Current known artist for a reference, if any
    pub fn retrieve_artist(&self, reference: &EntityRef) -> Option<Artist> {
        self.catalog
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .artists
            .get(reference)
            .cloned()
    }

    /// Current known playlist for a reference, if any
    pub fn retrieve_playlist(&self, reference: &EntityRef) -> Option<Playlist> {
        self.catalog
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .playlists
            .get(reference)
            .cloned()
    }

    // ===== Search =====

    /// Fan a search query out to every connected provider
    ///
    /// Each provider's tagged batch is delivered through `on_search_result`
    /// as it arrives; results for one query accumulate across providers.
    /// Receivers own last-query-wins filtering (the batch tag carries the
    /// query string). A failing provider is logged and contributes nothing.
    pub async fn search(&self, query: &str) {
        let providers = self.connected_providers().await;
        debug!(query, providers = providers.len(), "search issued");

        for provider in providers {
            match provider.search(query).await {
                Ok(result) => {
                    if result.query != query {
                        // provider mis-tagged the batch; do not forward it
                        warn!(provider = %provider.id(), "search result tag mismatch");
                        continue;
                    }
                    let batch = [result];
                    self.callbacks.notify(|cb| cb.on_search_result(&batch));
                }
                Err(e) => {
                    warn!(provider = %provider.id(), error = %e, "search failed");
                }
            }
        }
    }
}

impl Default for ProviderAggregator {
    fn default() -> Self {
        Self::new()
    }
}
