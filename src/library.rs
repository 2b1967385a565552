//! Track model and directory scanning.
//!
//! `Track` is the record owned by the lookup store. `scan` builds tracks from
//! audio files on disk so a session can be seeded at startup.

mod display;
mod model;
mod scan;

pub use display::display_from_fields;
pub use model::{PlayEntry, Rating, Track, TrackId, normalize};
pub use scan::scan;

#[cfg(test)]
mod tests;
