//! Playback event contract
//!
//! The transport-side counterpart of the catalog update contract: one-way
//! notifications about playback state, delivered on whatever thread observed
//! the transition. Hand off to a rendering loop before touching UI state.

use chorus_core::Song;

/// Observer contract for playback events
///
/// Every method has a no-op default so observers override only what they
/// display. The same registry rules as for catalog callbacks apply: weak
/// registration, unregister before teardown, no re-entrant registry calls
/// from inside a notification.
pub trait PlaybackCallback: Send + Sync {
    /// A track started (or restarted) playing
    ///
    /// `buffering` is true when the service is still loading the media and
    /// audio has not begun yet.
    fn on_song_started(&self, buffering: bool, song: &Song) {
        let _ = (buffering, song);
    }

    /// Playback was paused
    fn on_paused(&self) {}

    /// Playback resumed after a pause
    fn on_resumed(&self) {}

    /// Playback stopped; no track is loaded anymore
    fn on_stopped(&self) {}

    /// The queue contents or order changed
    fn on_queue_changed(&self) {}
}
