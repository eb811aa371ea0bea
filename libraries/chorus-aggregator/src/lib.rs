//! Chorus - Provider Aggregation
//!
//! Merges the catalogs of multiple [`MusicProvider`] plugins into one
//! observable view and fans incremental updates out to registered observers.
//!
//! This crate provides:
//! - The [`LocalCallback`] contract every interested component implements
//! - A weak-handle [`CallbackRegistry`] with scoped registration
//! - The [`ProviderAggregator`] itself: provider bookkeeping, a catalog cache
//!   looked up by [`EntityRef`], change detection, and search fan-out
//! - A channel hand-off ([`UpdateDispatcher`] / [`UpdateStream`]) so rendering
//!   code can consume notifications on its own loop
//! - [`SearchSession`], the receiver-side last-query-wins helper
//!
//! # Threading
//!
//! Notifications are delivered on whatever thread detected the change. An
//! observer that must only touch rendering state on one thread wraps itself
//! in an [`UpdateDispatcher`] and drains the paired [`UpdateStream`] from
//! that thread.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chorus_aggregator::{ProviderAggregator, update_channel};
//!
//! # async fn demo(provider: Arc<dyn chorus_core::MusicProvider>) {
//! let aggregator = Arc::new(ProviderAggregator::new());
//! let (dispatcher, mut updates) = update_channel();
//!
//! let observer: Arc<dyn chorus_aggregator::LocalCallback> = dispatcher;
//! let _registration = aggregator.scoped_callback(&observer);
//! aggregator.register_provider(provider.clone()).await;
//! aggregator.connect_provider(&provider.id()).await.ok();
//!
//! while let Some(event) = updates.next().await {
//!     // apply the event to rendering state
//!     let _ = event;
//! }
//! # }
//! ```
//!
//! [`MusicProvider`]: chorus_core::MusicProvider
//! [`EntityRef`]: chorus_core::EntityRef

#![forbid(unsafe_code)]

mod aggregator;
mod callback;
mod dispatch;
mod error;
mod registry;
mod search;

// Public exports
pub use aggregator::ProviderAggregator;
pub use callback::LocalCallback;
pub use dispatch::{update_channel, UpdateDispatcher, UpdateEvent, UpdateStream};
pub use error::{AggregatorError, Result};
pub use registry::{CallbackRegistry, Registration};
pub use search::SearchSession;
