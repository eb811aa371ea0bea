//! Listen log
//!
//! Bounded, most-recent-first log of playback events by entity reference.
//! Screens resolve the references back through the aggregator when they
//! render history; a reference that no longer resolves is shown as a
//! fallback, not an error.

use crate::types::ListenKind;
use chorus_core::EntityRef;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Default number of retained entries
const DEFAULT_CAPACITY: usize = 100;

/// One logged playback event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenEntry {
    /// Reference of the song the event concerns
    pub reference: EntityRef,

    /// What happened
    pub kind: ListenKind,

    /// When it happened
    pub at: DateTime<Utc>,
}

/// Bounded most-recent-first log of listen events
#[derive(Debug, Clone)]
pub struct ListenLog {
    entries: VecDeque<ListenEntry>,
    capacity: usize,
}

impl ListenLog {
    /// Create a log with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a log retaining at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Record an event, evicting the oldest entry when full
    pub fn record(&mut self, reference: EntityRef, kind: ListenKind) {
        self.entries.push_front(ListenEntry {
            reference,
            kind,
            at: Utc::now(),
        });
        self.entries.truncate(self.capacity);
    }

    /// Entries, most recent first
    pub fn entries(&self) -> impl Iterator<Item = &ListenEntry> {
        self.entries.iter()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ListenLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::ProviderId;

    fn reference(id: &str) -> EntityRef {
        EntityRef::new(ProviderId::new("local"), id)
    }

    #[test]
    fn most_recent_entry_comes_first() {
        let mut log = ListenLog::new();
        log.record(reference("song:1"), ListenKind::Started);
        log.record(reference("song:2"), ListenKind::Started);

        let first = log.entries().next().unwrap();
        assert_eq!(first.reference.reference, "song:2");
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut log = ListenLog::with_capacity(2);
        log.record(reference("song:1"), ListenKind::Started);
        log.record(reference("song:2"), ListenKind::Finished);
        log.record(reference("song:3"), ListenKind::Started);

        assert_eq!(log.len(), 2);
        let refs: Vec<&str> = log
            .entries()
            .map(|e| e.reference.reference.as_str())
            .collect();
        assert_eq!(refs, vec!["song:3", "song:2"]);
    }
}
