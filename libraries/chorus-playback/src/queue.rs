//! Flat playback queue
//!
//! The proxy's local mirror of the play order: an ordered list of resolved
//! songs plus the index of the current one. Navigation is non-destructive;
//! tracks stay in the queue after playing.

use chorus_core::Song;

/// Ordered play queue with a current position
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    songs: Vec<Song>,
    current: Option<usize>,
}

impl PlayQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue contents, positioning at the first track
    pub fn set(&mut self, songs: Vec<Song>) {
        self.current = if songs.is_empty() { None } else { Some(0) };
        self.songs = songs;
    }

    /// Append songs to the end of the queue
    pub fn append(&mut self, songs: Vec<Song>) {
        self.songs.extend(songs);
        if self.current.is_none() && !self.songs.is_empty() {
            self.current = Some(0);
        }
    }

    /// Insert songs right after the current track
    pub fn insert_next(&mut self, songs: Vec<Song>) {
        match self.current {
            Some(index) => {
                let at = (index + 1).min(self.songs.len());
                self.songs.splice(at..at, songs);
            }
            None => self.append(songs),
        }
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.songs.clear();
        self.current = None;
    }

    /// The current track, if any
    pub fn current(&self) -> Option<&Song> {
        self.current.and_then(|i| self.songs.get(i))
    }

    /// Index of the current track, if any
    pub fn position(&self) -> Option<usize> {
        self.current
    }

    /// Jump to a specific index
    pub fn skip_to(&mut self, index: usize) -> Option<&Song> {
        if index < self.songs.len() {
            self.current = Some(index);
            self.songs.get(index)
        } else {
            None
        }
    }

    /// Advance to the next track, if there is one
    pub fn advance(&mut self) -> Option<&Song> {
        match self.current {
            Some(index) if index + 1 < self.songs.len() => {
                self.current = Some(index + 1);
                self.songs.get(index + 1)
            }
            _ => None,
        }
    }

    /// Snapshot of the queued songs in play order
    pub fn snapshot(&self) -> Vec<Song> {
        self.songs.clone()
    }

    /// Number of queued songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the queue holds no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
