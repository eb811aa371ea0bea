//! Error types for playback

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The playback service is not reachable
    #[error("Playback service unavailable")]
    ServiceUnavailable,

    /// No playable track (empty queue or nothing resolved)
    #[error("Queue is empty")]
    EmptyQueue,

    /// Queue index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Service-side failure
    #[error("Playback service error: {0}")]
    Service(String),
}

impl PlaybackError {
    /// Create a service-side error
    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
