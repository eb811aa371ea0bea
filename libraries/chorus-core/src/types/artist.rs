//! Artist types

use crate::types::EntityRef;
use serde::{Deserialize, Serialize};

/// An artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Reference uniquely naming this artist
    pub reference: EntityRef,

    /// Artist name
    pub name: String,

    /// Album references attributed to this artist
    pub albums: Vec<EntityRef>,

    /// Art reference
    pub art: Option<String>,
}

impl Artist {
    /// Create a new artist with minimal metadata
    pub fn new(reference: EntityRef, name: impl Into<String>) -> Self {
        Self {
            reference,
            name: name.into(),
            albums: Vec::new(),
            art: None,
        }
    }
}
