//! Playback proxy
//!
//! The façade screens talk to: transport operations forwarded to the
//! playback service, a local queue mirror, a listen log, and playback-event
//! fan-out over the same weak-registry semantics as catalog updates.

use crate::callback::PlaybackCallback;
use crate::error::{PlaybackError, Result};
use crate::history::{ListenEntry, ListenLog};
use crate::queue::PlayQueue;
use crate::service::PlaybackService;
use crate::types::{ListenKind, PlaybackState};
use chorus_aggregator::{CallbackRegistry, ProviderAggregator, Registration};
use chorus_core::{Playlist, Song};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Façade over the playback service
///
/// Owned by the composition root and shared via `Arc`. All mutation goes
/// through the service or the internal queue lock, so the proxy is safe to
/// call from any thread.
pub struct PlaybackProxy {
    service: Arc<dyn PlaybackService>,
    aggregator: Arc<ProviderAggregator>,
    queue: Mutex<PlayQueue>,
    state: Mutex<PlaybackState>,
    history: Mutex<ListenLog>,
    callbacks: Arc<CallbackRegistry<dyn PlaybackCallback>>,
}

impl PlaybackProxy {
    /// Create a proxy over a service, resolving references through `aggregator`
    pub fn new(service: Arc<dyn PlaybackService>, aggregator: Arc<ProviderAggregator>) -> Self {
        Self {
            service,
            aggregator,
            queue: Mutex::new(PlayQueue::new()),
            state: Mutex::new(PlaybackState::Stopped),
            history: Mutex::new(ListenLog::new()),
            callbacks: Arc::new(CallbackRegistry::new()),
        }
    }

    // ===== Observer registration =====

    /// Register a playback-event observer; idempotent, weak handle only
    pub fn add_callback(&self, observer: &Arc<dyn PlaybackCallback>) {
        self.callbacks.register(observer);
    }

    /// Unregister an observer; a no-op if it was never registered
    pub fn remove_callback(&self, observer: &Arc<dyn PlaybackCallback>) {
        self.callbacks.unregister(observer);
    }

    /// Register an observer for the lifetime of the returned guard
    pub fn scoped_callback(
        &self,
        observer: &Arc<dyn PlaybackCallback>,
    ) -> Registration<dyn PlaybackCallback> {
        self.callbacks.register_scoped(observer)
    }

    // ===== Transport =====

    /// Replace the queue with one song and play it
    pub async fn play_song(&self, song: Song) -> Result<()> {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).set(vec![song.clone()]);
        self.callbacks.notify(|cb| cb.on_queue_changed());
        self.start(&song).await
    }

    /// Replace the queue with a playlist's resolved tracks and play the first
    ///
    /// Track references that no longer resolve are skipped. Fails with
    /// [`PlaybackError::EmptyQueue`] when nothing resolves.
    pub async fn play_playlist(&self, playlist: &Playlist) -> Result<()> {
        let songs = self.resolve_tracks(playlist);
        let first = songs.first().cloned().ok_or(PlaybackError::EmptyQueue)?;

        self.queue.lock().unwrap_or_else(|e| e.into_inner()).set(songs);
        self.callbacks.notify(|cb| cb.on_queue_changed());
        self.start(&first).await
    }

    /// Jump to a queue index and play it
    pub async fn play_at_index(&self, index: usize) -> Result<()> {
        let song = {
            let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
            queue
                .skip_to(index)
                .cloned()
                .ok_or(PlaybackError::IndexOutOfBounds(index))?
        };
        self.start(&song).await
    }

    /// Advance to the next queued track, logging the current one as skipped
    pub async fn next(&self) -> Result<()> {
        let (skipped, next) = {
            let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
            let skipped = queue.current().map(|s| s.reference.clone());
            (skipped, queue.advance().cloned())
        };
        let song = next.ok_or(PlaybackError::EmptyQueue)?;

        if let Some(reference) = skipped {
            self.history
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .record(reference, ListenKind::Skipped);
        }
        self.start(&song).await
    }

    /// Pause the current track
    pub async fn pause(&self) -> Result<()> {
        self.service.pause().await?;
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = PlaybackState::Paused;
        self.callbacks.notify(|cb| cb.on_paused());
        Ok(())
    }

    /// Resume the paused track
    pub async fn resume(&self) -> Result<()> {
        self.service.resume().await?;
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = PlaybackState::Playing;
        self.callbacks.notify(|cb| cb.on_resumed());
        Ok(())
    }

    /// Stop playback and unload the current track
    pub async fn stop(&self) -> Result<()> {
        self.service.stop().await?;
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = PlaybackState::Stopped;
        self.callbacks.notify(|cb| cb.on_stopped());
        Ok(())
    }

    // ===== Queue operations =====

    /// Append a playlist's resolved tracks to the queue
    ///
    /// With `top` set, the tracks are inserted right after the current one
    /// instead.
    pub fn queue_playlist(&self, playlist: &Playlist, top: bool) {
        let songs = self.resolve_tracks(playlist);
        if songs.is_empty() {
            return;
        }
        {
            let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
            if top {
                queue.insert_next(songs);
            } else {
                queue.append(songs);
            }
        }
        self.callbacks.notify(|cb| cb.on_queue_changed());
    }

    /// Append one song to the queue (or insert it next with `top`)
    pub fn queue_song(&self, song: Song, top: bool) {
        {
            let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
            if top {
                queue.insert_next(vec![song]);
            } else {
                queue.append(vec![song]);
            }
        }
        self.callbacks.notify(|cb| cb.on_queue_changed());
    }

    /// Empty the queue
    pub fn clear_queue(&self) {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).clear();
        self.callbacks.notify(|cb| cb.on_queue_changed());
    }

    // ===== Introspection =====

    /// The track the queue is positioned on, if any
    pub fn current_track(&self) -> Option<Song> {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .current()
            .cloned()
    }

    /// Snapshot of the queue in play order
    pub fn queue_snapshot(&self) -> Vec<Song> {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .snapshot()
    }

    /// Last known transport state
    pub fn state(&self) -> PlaybackState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Listen-log entries, most recent first
    pub fn history(&self) -> Vec<ListenEntry> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entries()
            .cloned()
            .collect()
    }

    // ===== Internals =====

    async fn start(&self, song: &Song) -> Result<()> {
        let state = self.service.play(song).await?;
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = state;

        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record(song.reference.clone(), ListenKind::Started);

        let buffering = state == PlaybackState::Buffering;
        self.callbacks.notify(|cb| cb.on_song_started(buffering, song));
        Ok(())
    }

    fn resolve_tracks(&self, playlist: &Playlist) -> Vec<Song> {
        let mut songs = Vec::with_capacity(playlist.tracks.len());
        for reference in &playlist.tracks {
            match self.aggregator.retrieve_song(reference) {
                Some(song) => songs.push(song),
                None => {
                    debug!(reference = %reference, playlist = %playlist.name, "track did not resolve, skipping");
                }
            }
        }
        songs
    }
}
