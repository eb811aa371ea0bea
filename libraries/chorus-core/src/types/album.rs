//! Album types

use crate::types::EntityRef;
use serde::{Deserialize, Serialize};

/// An album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Reference uniquely naming this album
    pub reference: EntityRef,

    /// Album title
    pub title: String,

    /// Reference to the album artist, if known
    pub artist: Option<EntityRef>,

    /// Ordered song references
    pub songs: Vec<EntityRef>,

    /// Release year
    pub year: Option<u32>,

    /// Art reference
    pub art: Option<String>,
}

impl Album {
    /// Create a new album with minimal metadata
    pub fn new(reference: EntityRef, title: impl Into<String>) -> Self {
        Self {
            reference,
            title: title.into(),
            artist: None,
            songs: Vec::new(),
            year: None,
            art: None,
        }
    }
}
