//! In-memory music track index.
//!
//! Tracks live in a single authoritative store (`engine::LookupIndex`); the
//! playlist, rating, history, skip and replay engines hold track ids only.
//! `Session` ties the engines together.

pub mod collections;
pub mod config;
pub mod engine;
pub mod error;
pub mod library;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod sort;

pub use error::{Error, Result};
pub use library::{PlayEntry, Rating, Track, TrackId};
pub use session::{Session, SessionStats};
