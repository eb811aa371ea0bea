//! Receiver-side search state
//!
//! The aggregator delivers one tagged batch per provider as results arrive;
//! filtering out batches for superseded queries is the receiver's job. A
//! `SearchSession` tracks the query the receiver last issued, accepts only
//! batches whose tag matches it, and accumulates accepted hits across
//! providers (accumulate-per-query: no timeout, no first-provider-wins).

use chorus_core::{EntityRef, SearchResult};

/// Last-query-wins accumulator for search results
#[derive(Debug, Default)]
pub struct SearchSession {
    query: Option<String>,
    songs: Vec<EntityRef>,
    artists: Vec<EntityRef>,
    albums: Vec<EntityRef>,
    playlists: Vec<EntityRef>,
}

impl SearchSession {
    /// Create a session with no query in flight
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new query, superseding the previous one
    ///
    /// Clears accumulated hits; batches tagged with any earlier query are
    /// discarded from now on.
    pub fn begin(&mut self, query: impl Into<String>) {
        self.query = Some(query.into());
        self.songs.clear();
        self.artists.clear();
        self.albums.clear();
        self.playlists.clear();
    }

    /// The currently issued query, if any
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Offer a result batch to the session
    ///
    /// Accepts and accumulates the batch if its tag matches the current
    /// query; silently discards it otherwise. Repeated delivery of the same
    /// batch is absorbed without duplicating hits. Returns whether the batch
    /// was accepted.
    pub fn accept(&mut self, result: &SearchResult) -> bool {
        let Some(query) = self.query.as_deref() else {
            return false;
        };
        if result.query != query {
            return false;
        }

        Self::merge(&mut self.songs, &result.songs);
        Self::merge(&mut self.artists, &result.artists);
        Self::merge(&mut self.albums, &result.albums);
        Self::merge(&mut self.playlists, &result.playlists);
        true
    }

    fn merge(into: &mut Vec<EntityRef>, hits: &[EntityRef]) {
        for hit in hits {
            if !into.contains(hit) {
                into.push(hit.clone());
            }
        }
    }

    /// Accumulated song hits for the current query
    pub fn songs(&self) -> &[EntityRef] {
        &self.songs
    }

    /// Accumulated artist hits for the current query
    pub fn artists(&self) -> &[EntityRef] {
        &self.artists
    }

    /// Accumulated album hits for the current query
    pub fn albums(&self) -> &[EntityRef] {
        &self.albums
    }

    /// Accumulated playlist hits for the current query
    pub fn playlists(&self) -> &[EntityRef] {
        &self.playlists
    }

    /// Whether the session holds no hits
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
            && self.artists.is_empty()
            && self.albums.is_empty()
            && self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::ProviderId;

    fn batch(query: &str, provider: &str, song_refs: &[&str]) -> SearchResult {
        let provider = ProviderId::new(provider);
        let mut result = SearchResult::new(query, provider.clone());
        for song in song_refs {
            result.songs.push(EntityRef::new(provider.clone(), *song));
        }
        result
    }

    #[test]
    fn stale_query_results_are_discarded() {
        let mut session = SearchSession::new();
        session.begin("A");
        session.begin("B");

        // "A" resolves late
        assert!(!session.accept(&batch("A", "local", &["song:1"])));
        assert!(session.accept(&batch("B", "local", &["song:2"])));

        assert_eq!(session.songs().len(), 1);
        assert_eq!(session.songs()[0].reference, "song:2");
    }

    #[test]
    fn batches_accumulate_across_providers() {
        let mut session = SearchSession::new();
        session.begin("love");

        assert!(session.accept(&batch("love", "local", &["song:1"])));
        assert!(session.accept(&batch("love", "remote", &["song:9"])));

        assert_eq!(session.songs().len(), 2);
    }

    #[test]
    fn duplicate_delivery_is_idempotent() {
        let mut session = SearchSession::new();
        session.begin("love");

        let b = batch("love", "local", &["song:1"]);
        assert!(session.accept(&b));
        assert!(session.accept(&b));

        assert_eq!(session.songs().len(), 1);
    }

    #[test]
    fn new_query_clears_accumulated_hits() {
        let mut session = SearchSession::new();
        session.begin("love");
        session.accept(&batch("love", "local", &["song:1"]));

        session.begin("hate");
        assert!(session.is_empty());
        assert_eq!(session.query(), Some("hate"));
    }

    #[test]
    fn no_query_accepts_nothing() {
        let mut session = SearchSession::new();
        assert!(!session.accept(&batch("love", "local", &["song:1"])));
    }
}
