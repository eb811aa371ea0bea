//! Chorus Shell - composition root and rendering loop
//!
//! A headless front end over the Chorus libraries: it constructs the
//! aggregator and playback proxy explicitly (no process-wide singletons),
//! seeds an in-memory provider, and drives a rendering loop that consumes
//! catalog updates over a channel.

#![forbid(unsafe_code)]

pub mod config;
pub mod playback;
pub mod providers;
pub mod rows;
pub mod screen;
