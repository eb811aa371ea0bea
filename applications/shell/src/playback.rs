//! Playback service stub
//!
//! The real playback service lives in its own process; the shell runs
//! against a stub that accepts every transport operation and logs it.

use async_trait::async_trait;
use chorus_core::Song;
use chorus_playback::{PlaybackService, PlaybackState, Result};
use std::sync::Mutex;
use tracing::info;

/// Accepts every transport call and reports it via tracing
pub struct LoggingPlaybackService {
    state: Mutex<PlaybackState>,
}

impl LoggingPlaybackService {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PlaybackState::Stopped),
        }
    }
}

impl Default for LoggingPlaybackService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaybackService for LoggingPlaybackService {
    async fn play(&self, song: &Song) -> Result<PlaybackState> {
        info!(song = %song.reference, title = %song.title, "play");
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = PlaybackState::Playing;
        Ok(PlaybackState::Playing)
    }

    async fn pause(&self) -> Result<()> {
        info!("pause");
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = PlaybackState::Paused;
        Ok(())
    }

    async fn resume(&self) -> Result<()> {
        info!("resume");
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = PlaybackState::Playing;
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        info!("stop");
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = PlaybackState::Stopped;
        Ok(())
    }

    async fn state(&self) -> PlaybackState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
