//! Error types for provider aggregation

use chorus_core::{CoreError, ProviderId};
use thiserror::Error;

/// Aggregation errors
#[derive(Debug, Error)]
pub enum AggregatorError {
    /// The named provider was never registered
    #[error("Provider not registered: {0}")]
    ProviderNotRegistered(ProviderId),

    /// A provider operation failed
    #[error("Provider {provider} failed: {message}")]
    ProviderFailed {
        provider: ProviderId,
        message: String,
    },

    /// The update channel consumer has gone away
    #[error("Update channel closed")]
    ChannelClosed,

    /// Error bubbled up from the core layer
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AggregatorError {
    /// Create a provider failure from any core error
    pub fn provider_failed(provider: ProviderId, err: &CoreError) -> Self {
        Self::ProviderFailed {
            provider,
            message: err.to_string(),
        }
    }
}

/// Result type for aggregation operations
pub type Result<T> = std::result::Result<T, AggregatorError>;
