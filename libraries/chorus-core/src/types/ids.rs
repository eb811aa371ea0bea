/// Reference types for Chorus entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Provider identifier
///
/// Names one provider plugin instance (e.g. a streaming service connector or
/// the local library).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    /// Create a new provider ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random provider ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entity reference: a (provider, local reference) pair
///
/// Uniquely names a song, album, artist, or playlist within the aggregated
/// catalog. Two entity instances describe the same logical item exactly when
/// their references are equal; object identity is meaningless across
/// providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    /// Provider that owns the entity
    pub provider: ProviderId,

    /// Provider-local reference string
    pub reference: String,
}

impl EntityRef {
    /// Create a new entity reference
    pub fn new(provider: ProviderId, reference: impl Into<String>) -> Self {
        Self {
            provider,
            reference: reference.into(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider, self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_id_generation_creates_unique_ids() {
        let id1 = ProviderId::generate();
        let id2 = ProviderId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn entity_ref_equality_is_by_value() {
        let a = EntityRef::new(ProviderId::new("local"), "song:1");
        let b = EntityRef::new(ProviderId::new("local"), "song:1");
        let c = EntityRef::new(ProviderId::new("remote"), "song:1");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn entity_ref_display() {
        let r = EntityRef::new(ProviderId::new("local"), "album:42");
        assert_eq!(format!("{}", r), "local/album:42");
    }
}
