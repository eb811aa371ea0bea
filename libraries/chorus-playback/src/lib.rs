//! Chorus - Playback Façade
//!
//! A thin front over the playback service: screens call transport operations
//! here and register for playback events, without holding a connection to the
//! service themselves.
//!
//! This crate provides:
//! - The [`PlaybackService`] boundary trait the real (out-of-process) service
//!   implements
//! - [`PlaybackProxy`]: transport operations (`play_song`, `play_playlist`,
//!   `play_at_index`, `pause`, `clear_queue`, `queue_playlist`, ...) plus
//!   playback-event observer registration
//! - The flat [`PlayQueue`] the proxy maintains
//! - A bounded [`ListenLog`] of recently played references
//!
//! Playlist track references are resolved through the
//! [`ProviderAggregator`](chorus_aggregator::ProviderAggregator); references
//! that no longer resolve are skipped, never an error.
//!
//! # Example
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use chorus_playback::{PlaybackProxy, PlaybackService};
//! # use chorus_aggregator::ProviderAggregator;
//! # async fn demo(service: Arc<dyn PlaybackService>, song: chorus_core::Song) {
//! let aggregator = Arc::new(ProviderAggregator::new());
//! let proxy = PlaybackProxy::new(service, aggregator);
//!
//! proxy.play_song(song).await.ok();
//! proxy.pause().await.ok();
//! # }
//! ```

#![forbid(unsafe_code)]

mod callback;
mod error;
mod history;
mod proxy;
mod queue;
mod service;
pub mod types;

// Public exports
pub use callback::PlaybackCallback;
pub use error::{PlaybackError, Result};
pub use history::{ListenEntry, ListenLog};
pub use proxy::PlaybackProxy;
pub use queue::PlayQueue;
pub use service::PlaybackService;
pub use types::{ListenKind, PlaybackState};
