//! Chorus Core
//!
//! Shared domain types, traits, and error handling for Chorus.
//!
//! Every catalog entity (song, album, artist, playlist) is identified by an
//! [`EntityRef`]: a (provider, reference) pair. Entities are always looked up
//! by reference, never by object identity, because each provider may hand
//! back a different instance for the same logical item.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Album`, `Artist`, `Playlist`, `SearchResult`
//! - **Provider Boundary**: the [`MusicProvider`] trait implemented by every
//!   pluggable music source
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chorus_core::types::{EntityRef, ProviderId, Song};
//!
//! let provider = ProviderId::new("local");
//! let reference = EntityRef::new(provider, "song:1");
//! let song = Song::new(reference, "My Favorite Song");
//! assert_eq!(song.title, "My Favorite Song");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::MusicProvider;
pub use types::{
    Album, Artist, EntityRef, Playlist, ProviderId, ProviderStatus, SearchResult, Song,
};
