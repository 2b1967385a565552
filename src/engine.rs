//! Engines composed from the containers.
//!
//! Each engine owns its containers outright and depends only on
//! `collections` and `sort`. Only `LookupIndex` stores full `Track`
//! records; the rest work in track ids.

mod history;
mod lookup;
mod playlist;
mod ratings;
mod replay;
mod skips;

pub use history::HistoryStack;
pub use lookup::{LookupIndex, LookupStats};
pub use playlist::PlaylistIndex;
pub use ratings::{RatingDistribution, RatingIndex};
pub use replay::ReplaySelector;
pub use skips::SkipTracker;
