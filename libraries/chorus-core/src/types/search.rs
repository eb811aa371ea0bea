//! Search result types
//!
//! Each result batch is tagged with the query string that produced it.
//! Receivers compare the tag against the query they last issued and discard
//! stale batches; last-query-wins is the receiver's responsibility, not the
//! sender's.

use crate::types::{EntityRef, ProviderId};
use serde::{Deserialize, Serialize};

/// One provider's results for one search query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The query string this batch answers
    pub query: String,

    /// Provider that produced the batch
    pub provider: ProviderId,

    /// Matching song references, best match first
    pub songs: Vec<EntityRef>,

    /// Matching artist references, best match first
    pub artists: Vec<EntityRef>,

    /// Matching album references, best match first
    pub albums: Vec<EntityRef>,

    /// Matching playlist references, best match first
    pub playlists: Vec<EntityRef>,
}

impl SearchResult {
    /// Create an empty result batch for a query
    pub fn new(query: impl Into<String>, provider: ProviderId) -> Self {
        Self {
            query: query.into(),
            provider,
            songs: Vec::new(),
            artists: Vec::new(),
            albums: Vec::new(),
            playlists: Vec::new(),
        }
    }

    /// Whether the batch contains no hits at all
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
            && self.artists.is_empty()
            && self.albums.is_empty()
            && self.playlists.is_empty()
    }
}
