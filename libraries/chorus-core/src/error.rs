/// Core error types for Chorus
use crate::types::{EntityRef, ProviderId};
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Chorus
#[derive(Error, Debug)]
pub enum CoreError {
    /// Provider is not connected or has gone away
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(ProviderId),

    /// Entity not found in the catalog
    ///
    /// Aggregator lookups return `Option` instead of this error; providers
    /// use it when a reference they are asked about does not belong to them.
    #[error("{entity} not found: {reference}")]
    NotFound { entity: String, reference: EntityRef },

    /// A reference string could not be parsed or belongs to another provider
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Provider-side failure (network, plugin crash, ...)
    #[error("Provider error: {0}")]
    Provider(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, reference: EntityRef) -> Self {
        Self::NotFound {
            entity: entity.into(),
            reference,
        }
    }

    /// Create an invalid reference error
    pub fn invalid_reference(msg: impl Into<String>) -> Self {
        Self::InvalidReference(msg.into())
    }

    /// Create a provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create an other error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
