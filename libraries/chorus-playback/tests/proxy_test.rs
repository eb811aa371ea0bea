//! Playback proxy integration tests
//!
//! Drive the proxy with a recording fake service and verify transport
//! forwarding, queue handling, reference resolution, event fan-out, and the
//! listen log.

use async_trait::async_trait;
use chorus_aggregator::ProviderAggregator;
use chorus_core::{EntityRef, Playlist, ProviderId, Song};
use chorus_playback::{
    ListenKind, PlaybackCallback, PlaybackProxy, PlaybackService, PlaybackState, Result,
};
use std::sync::{Arc, Mutex};

// ===== Test doubles =====

/// Service that records every call and plays immediately
struct FakeService {
    calls: Mutex<Vec<String>>,
    /// state reported by `play`
    play_state: Mutex<PlaybackState>,
}

impl FakeService {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            play_state: Mutex::new(PlaybackState::Playing),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaybackService for FakeService {
    async fn play(&self, song: &Song) -> Result<PlaybackState> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("play {}", song.reference.reference));
        Ok(*self.play_state.lock().unwrap())
    }

    async fn pause(&self) -> Result<()> {
        self.calls.lock().unwrap().push("pause".into());
        Ok(())
    }

    async fn resume(&self) -> Result<()> {
        self.calls.lock().unwrap().push("resume".into());
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        self.calls.lock().unwrap().push("stop".into());
        Ok(())
    }

    async fn state(&self) -> PlaybackState {
        *self.play_state.lock().unwrap()
    }
}

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl Recorder {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl PlaybackCallback for Recorder {
    fn on_song_started(&self, buffering: bool, song: &Song) {
        self.events
            .lock()
            .unwrap()
            .push(format!("started {} buffering={buffering}", song.reference.reference));
    }

    fn on_paused(&self) {
        self.events.lock().unwrap().push("paused".into());
    }

    fn on_resumed(&self) {
        self.events.lock().unwrap().push("resumed".into());
    }

    fn on_stopped(&self) {
        self.events.lock().unwrap().push("stopped".into());
    }

    fn on_queue_changed(&self) {
        self.events.lock().unwrap().push("queue".into());
    }
}

fn song(id: &str, title: &str) -> Song {
    Song::new(EntityRef::new(ProviderId::new("local"), id), title)
}

fn proxy_with(service: Arc<FakeService>, songs: Vec<Song>) -> (PlaybackProxy, Arc<ProviderAggregator>) {
    let aggregator = Arc::new(ProviderAggregator::new());
    aggregator.ingest_songs(songs);
    let proxy = PlaybackProxy::new(service, aggregator.clone());
    (proxy, aggregator)
}

// ===== Transport =====

#[tokio::test]
async fn play_song_forwards_and_notifies() {
    let service = FakeService::new();
    let (proxy, _) = proxy_with(service.clone(), Vec::new());

    let recorder = Recorder::new();
    proxy.add_callback(&(recorder.clone() as Arc<dyn PlaybackCallback>));

    proxy.play_song(song("song:1", "First Light")).await.unwrap();

    assert_eq!(service.calls(), vec!["play song:1"]);
    assert_eq!(proxy.state(), PlaybackState::Playing);
    assert_eq!(
        recorder.events(),
        vec!["queue", "started song:1 buffering=false"]
    );
    assert_eq!(proxy.current_track().unwrap().title, "First Light");
}

#[tokio::test]
async fn buffering_service_reports_buffering_start() {
    let service = FakeService::new();
    *service.play_state.lock().unwrap() = PlaybackState::Buffering;
    let (proxy, _) = proxy_with(service.clone(), Vec::new());

    let recorder = Recorder::new();
    proxy.add_callback(&(recorder.clone() as Arc<dyn PlaybackCallback>));

    proxy.play_song(song("song:1", "First Light")).await.unwrap();

    assert_eq!(proxy.state(), PlaybackState::Buffering);
    assert!(recorder
        .events()
        .contains(&"started song:1 buffering=true".to_string()));
}

#[tokio::test]
async fn pause_resume_stop_cycle() {
    let service = FakeService::new();
    let (proxy, _) = proxy_with(service.clone(), Vec::new());

    proxy.play_song(song("song:1", "First Light")).await.unwrap();
    proxy.pause().await.unwrap();
    assert_eq!(proxy.state(), PlaybackState::Paused);
    proxy.resume().await.unwrap();
    assert_eq!(proxy.state(), PlaybackState::Playing);
    proxy.stop().await.unwrap();
    assert_eq!(proxy.state(), PlaybackState::Stopped);

    assert_eq!(
        service.calls(),
        vec!["play song:1", "pause", "resume", "stop"]
    );
}

// ===== Playlists and the queue =====

#[tokio::test]
async fn play_playlist_resolves_refs_and_skips_missing() {
    let service = FakeService::new();
    let known = vec![song("song:1", "First"), song("song:2", "Second")];
    let (proxy, _) = proxy_with(service.clone(), known);

    let provider = ProviderId::new("local");
    let mut playlist = Playlist::new(EntityRef::new(provider.clone(), "playlist:1"), "Mix");
    playlist.tracks = vec![
        EntityRef::new(provider.clone(), "song:1"),
        EntityRef::new(provider.clone(), "song:404"), // never synced
        EntityRef::new(provider.clone(), "song:2"),
    ];

    proxy.play_playlist(&playlist).await.unwrap();

    // the dangling ref is dropped, play order preserved
    let queued: Vec<String> = proxy
        .queue_snapshot()
        .iter()
        .map(|s| s.reference.reference.clone())
        .collect();
    assert_eq!(queued, vec!["song:1", "song:2"]);
    assert_eq!(service.calls(), vec!["play song:1"]);
}

#[tokio::test]
async fn play_playlist_with_nothing_resolvable_fails() {
    let service = FakeService::new();
    let (proxy, _) = proxy_with(service.clone(), Vec::new());

    let provider = ProviderId::new("local");
    let mut playlist = Playlist::new(EntityRef::new(provider.clone(), "playlist:1"), "Mix");
    playlist.tracks = vec![EntityRef::new(provider, "song:404")];

    let err = proxy.play_playlist(&playlist).await.unwrap_err();
    assert!(matches!(err, chorus_playback::PlaybackError::EmptyQueue));
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn play_at_index_and_bounds() {
    let service = FakeService::new();
    let songs = vec![song("song:1", "First"), song("song:2", "Second")];
    let (proxy, _) = proxy_with(service.clone(), songs.clone());

    let provider = ProviderId::new("local");
    let mut playlist = Playlist::new(EntityRef::new(provider.clone(), "playlist:1"), "Mix");
    playlist.tracks = songs.iter().map(|s| s.reference.clone()).collect();

    proxy.play_playlist(&playlist).await.unwrap();
    proxy.play_at_index(1).await.unwrap();
    assert_eq!(proxy.current_track().unwrap().reference.reference, "song:2");

    let err = proxy.play_at_index(9).await.unwrap_err();
    assert!(matches!(
        err,
        chorus_playback::PlaybackError::IndexOutOfBounds(9)
    ));
}

#[tokio::test]
async fn queue_playlist_top_inserts_after_current() {
    let service = FakeService::new();
    let songs = vec![
        song("song:1", "First"),
        song("song:2", "Second"),
        song("song:3", "Third"),
    ];
    let (proxy, _) = proxy_with(service.clone(), songs.clone());

    proxy.play_song(songs[0].clone()).await.unwrap();

    let provider = ProviderId::new("local");
    let mut rest = Playlist::new(EntityRef::new(provider.clone(), "playlist:1"), "Rest");
    rest.tracks = vec![songs[1].reference.clone()];
    let mut top = Playlist::new(EntityRef::new(provider.clone(), "playlist:2"), "Top");
    top.tracks = vec![songs[2].reference.clone()];

    proxy.queue_playlist(&rest, false);
    proxy.queue_playlist(&top, true);

    let queued: Vec<String> = proxy
        .queue_snapshot()
        .iter()
        .map(|s| s.reference.reference.clone())
        .collect();
    assert_eq!(queued, vec!["song:1", "song:3", "song:2"]);
}

#[tokio::test]
async fn clear_queue_notifies_and_empties() {
    let service = FakeService::new();
    let (proxy, _) = proxy_with(service.clone(), Vec::new());

    let recorder = Recorder::new();
    proxy.add_callback(&(recorder.clone() as Arc<dyn PlaybackCallback>));

    proxy.queue_song(song("song:1", "First"), false);
    proxy.clear_queue();

    assert!(proxy.queue_snapshot().is_empty());
    assert!(proxy.current_track().is_none());
    assert_eq!(recorder.events(), vec!["queue", "queue"]);
}

// ===== History and observer lifecycle =====

#[tokio::test]
async fn skipping_logs_skip_then_start() {
    let service = FakeService::new();
    let songs = vec![song("song:1", "First"), song("song:2", "Second")];
    let (proxy, _) = proxy_with(service.clone(), songs.clone());

    let provider = ProviderId::new("local");
    let mut playlist = Playlist::new(EntityRef::new(provider, "playlist:1"), "Mix");
    playlist.tracks = songs.iter().map(|s| s.reference.clone()).collect();

    proxy.play_playlist(&playlist).await.unwrap();
    proxy.next().await.unwrap();

    let history = proxy.history();
    let kinds: Vec<(String, ListenKind)> = history
        .iter()
        .map(|e| (e.reference.reference.clone(), e.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("song:2".to_string(), ListenKind::Started),
            ("song:1".to_string(), ListenKind::Skipped),
            ("song:1".to_string(), ListenKind::Started),
        ]
    );
}

#[tokio::test]
async fn removed_callback_hears_nothing_more() {
    let service = FakeService::new();
    let (proxy, _) = proxy_with(service.clone(), Vec::new());

    let recorder = Recorder::new();
    let handle = recorder.clone() as Arc<dyn PlaybackCallback>;
    proxy.add_callback(&handle);
    proxy.play_song(song("song:1", "First")).await.unwrap();
    let before = recorder.events().len();

    proxy.remove_callback(&handle);
    proxy.pause().await.unwrap();
    proxy.clear_queue();

    assert_eq!(recorder.events().len(), before);
}

#[tokio::test]
async fn scoped_playback_registration_releases_on_drop() {
    let service = FakeService::new();
    let (proxy, _) = proxy_with(service.clone(), Vec::new());

    let recorder = Recorder::new();
    {
        let _registration = proxy.scoped_callback(&(recorder.clone() as Arc<dyn PlaybackCallback>));
        proxy.play_song(song("song:1", "First")).await.unwrap();
        assert!(!recorder.events().is_empty());
    }

    let before = recorder.events().len();
    proxy.pause().await.unwrap();
    assert_eq!(recorder.events().len(), before);
}
