//! Multi-key track lookup and the authoritative track store.
//!
//! `by_id` owns every `Track`. Title and artist tables map normalized
//! (trimmed, lowercased) strings back to ids. Titles are not unique: the
//! title table points at the most recently indexed track with that title.

use serde::Serialize;

use crate::collections::{ChainedHashTable, OrderedList, TableStats};
use crate::library::{Rating, Track, TrackId, normalize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LookupStats {
    pub by_id: TableStats,
    pub by_title: TableStats,
    pub by_artist: TableStats,
}

#[derive(Debug)]
pub struct LookupIndex {
    by_id: ChainedHashTable<Track>,
    by_title: ChainedHashTable<TrackId>,
    by_artist: ChainedHashTable<OrderedList<TrackId>>,
}

impl Default for LookupIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupIndex {
    pub fn new() -> Self {
        Self::with_capacity(crate::collections::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_id: ChainedHashTable::with_capacity(capacity),
            by_title: ChainedHashTable::with_capacity(capacity),
            by_artist: ChainedHashTable::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.has(id)
    }

    /// Store a new track. Returns `false` if the id is already taken.
    pub fn insert(&mut self, track: Track) -> bool {
        if self.by_id.has(&track.id) {
            return false;
        }
        self.index_names(&track);
        self.by_id.set(track.id.clone(), track);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<Track> {
        let track = self.by_id.delete(id)?;
        self.unindex_names(&track);
        Some(track)
    }

    pub fn get(&self, id: &str) -> Option<&Track> {
        self.by_id.get(id)
    }

    /// Replace the metadata of the stored track with `track.id`, moving its
    /// title and artist mappings in the same call.
    pub fn update(&mut self, track: &Track) -> bool {
        let Some(stored) = self.by_id.get(&track.id) else {
            return false;
        };
        let mut updated = stored.clone();
        self.unindex_names(&updated);
        updated.apply_metadata(track);
        self.index_names(&updated);
        self.by_id.set(updated.id.clone(), updated);
        true
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Track> {
        let id = self.by_title.get(&normalize(title))?;
        self.by_id.get(id)
    }

    pub fn find_by_artist(&self, artist: &str) -> Vec<&Track> {
        match self.by_artist.get(&normalize(artist)) {
            Some(ids) => ids.iter().filter_map(|id| self.by_id.get(id)).collect(),
            None => Vec::new(),
        }
    }

    pub fn set_rating(&mut self, id: &str, rating: Option<Rating>) -> bool {
        match self.by_id.get_mut(id) {
            Some(track) => {
                track.rating = rating;
                true
            }
            None => false,
        }
    }

    /// Bump the play count; returns the new count.
    pub fn record_play(&mut self, id: &str) -> Option<u32> {
        let track = self.by_id.get_mut(id)?;
        track.play_count = track.play_count.saturating_add(1);
        Some(track.play_count)
    }

    pub fn revert_play(&mut self, id: &str) -> Option<u32> {
        let track = self.by_id.get_mut(id)?;
        track.play_count = track.play_count.saturating_sub(1);
        Some(track.play_count)
    }

    /// Tracks in storage order.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.by_id.values()
    }

    pub fn ids(&self) -> Vec<TrackId> {
        self.by_id.keys().map(str::to_string).collect()
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
        self.by_title.clear();
        self.by_artist.clear();
    }

    pub fn stats(&self) -> LookupStats {
        LookupStats {
            by_id: self.by_id.stats(),
            by_title: self.by_title.stats(),
            by_artist: self.by_artist.stats(),
        }
    }

    fn index_names(&mut self, track: &Track) {
        self.by_title.set(normalize(&track.title), track.id.clone());

        if let Some(artist) = track.artist.as_deref() {
            let key = normalize(artist);
            match self.by_artist.get_mut(&key) {
                Some(ids) => ids.append(track.id.clone()),
                None => {
                    let mut ids = OrderedList::new();
                    ids.append(track.id.clone());
                    self.by_artist.set(key, ids);
                }
            }
        }
    }

    // `track` must already be gone from `by_id` or carry its old metadata.
    fn unindex_names(&mut self, track: &Track) {
        let title_key = normalize(&track.title);
        if self.by_title.get(&title_key) == Some(&track.id) {
            self.by_title.delete(&title_key);
            // Point the title at another track that still carries it.
            let fallback = self
                .by_id
                .values()
                .find(|t| t.id != track.id && normalize(&t.title) == title_key)
                .map(|t| t.id.clone());
            if let Some(other) = fallback {
                self.by_title.set(title_key, other);
            }
        }

        if let Some(artist) = track.artist.as_deref() {
            let key = normalize(artist);
            let emptied = match self.by_artist.get_mut(&key) {
                Some(ids) => {
                    if let Some(pos) = ids.index_of(&track.id) {
                        ids.remove_at(pos);
                    }
                    ids.is_empty()
                }
                None => false,
            };
            if emptied {
                self.by_artist.delete(&key);
            }
        }
    }
}
