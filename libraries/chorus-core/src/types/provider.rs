//! Provider connection state

use serde::{Deserialize, Serialize};

/// Connection state of a provider plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderStatus {
    /// Not reachable; no catalog data can be fetched
    Disconnected,
    /// Connection in progress
    Connecting,
    /// Ready; catalog and search operations may be issued
    Connected,
}

impl ProviderStatus {
    /// Whether the provider can serve catalog and search requests
    pub fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }
}
