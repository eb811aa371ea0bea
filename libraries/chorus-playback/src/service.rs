//! Playback service boundary

use crate::error::Result;
use crate::types::PlaybackState;
use async_trait::async_trait;
use chorus_core::Song;

/// Out-of-process playback service boundary
///
/// The real implementation lives in the playback service process; the proxy
/// forwards transport operations here and owns everything else (queue,
/// listen log, event fan-out). Implementations must be safe to call from any
/// thread.
#[async_trait]
pub trait PlaybackService: Send + Sync {
    /// Load and start playing a song
    ///
    /// Returns the immediate transport state: `Playing` when audio started,
    /// `Buffering` when the media is still loading.
    async fn play(&self, song: &Song) -> Result<PlaybackState>;

    /// Pause the current track
    async fn pause(&self) -> Result<()>;

    /// Resume the paused track
    async fn resume(&self) -> Result<()>;

    /// Stop and unload the current track
    async fn stop(&self) -> Result<()>;

    /// Current transport state
    async fn state(&self) -> PlaybackState;
}
