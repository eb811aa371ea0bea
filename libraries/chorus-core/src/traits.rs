/// Core traits for Chorus
use crate::error::Result;
use crate::types::{Album, Artist, Playlist, ProviderId, ProviderStatus, SearchResult, Song};
use async_trait::async_trait;

/// Pluggable music source boundary
///
/// Implemented by every provider plugin (streaming connector, local library,
/// ...). Fetch operations return whatever subset of the catalog the provider
/// currently knows; the aggregator merges results across providers and
/// detects changes.
///
/// Implementations must be safe to call from any thread.
#[async_trait]
pub trait MusicProvider: Send + Sync {
    /// Stable identifier of this provider instance
    fn id(&self) -> ProviderId;

    /// Current connection state
    fn status(&self) -> ProviderStatus;

    /// Establish the provider connection
    ///
    /// # Errors
    /// Returns an error if the provider cannot be reached.
    async fn connect(&self) -> Result<()>;

    /// Fetch the songs currently known to this provider
    async fn songs(&self) -> Result<Vec<Song>>;

    /// Fetch the albums currently known to this provider
    async fn albums(&self) -> Result<Vec<Album>>;

    /// Fetch the artists currently known to this provider
    async fn artists(&self) -> Result<Vec<Artist>>;

    /// Fetch the playlists currently known to this provider
    async fn playlists(&self) -> Result<Vec<Playlist>>;

    /// Search the provider's catalog
    ///
    /// The returned batch is tagged with `query` so receivers can discard
    /// results that arrive after the query was superseded.
    async fn search(&self, query: &str) -> Result<SearchResult>;
}
