//! Genre and play-count bookkeeping for auto-replay.
//!
//! Candidates are tracks in a "calming" genre, most played first. Ties keep
//! the order in which tracks were first registered.

use crate::collections::{ChainedHashTable, OrderedList};
use crate::library::{TrackId, normalize};
use crate::sort::merge_sort;

#[derive(Debug)]
pub struct ReplaySelector {
    play_counts: ChainedHashTable<u32>,
    genres: ChainedHashTable<String>,
    calming: ChainedHashTable<()>,
    /// Ids in registration order; the tie-break for equal counts.
    order: OrderedList<TrackId>,
}

impl ReplaySelector {
    pub fn new<I, S>(calming_genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selector = Self {
            play_counts: ChainedHashTable::new(),
            genres: ChainedHashTable::new(),
            calming: ChainedHashTable::new(),
            order: OrderedList::new(),
        };
        selector.set_calming_genres(calming_genres);
        selector
    }

    /// Replace the calming genre set.
    pub fn set_calming_genres<I, S>(&mut self, genres: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.calming.clear();
        for g in genres {
            let g = normalize(g.as_ref());
            if !g.is_empty() {
                self.calming.set(g, ());
            }
        }
    }

    pub fn calming_genres(&self) -> Vec<String> {
        self.calming.keys().map(str::to_string).collect()
    }

    pub fn is_calming(&self, genre: &str) -> bool {
        self.calming.has(&normalize(genre))
    }

    /// Start tracking `id` with an initial play count.
    pub fn register(&mut self, id: &str, genre: Option<&str>, play_count: u32) {
        if self.play_counts.set(id, play_count).is_none() {
            self.order.append(id.to_string());
        }
        self.update_genre(id, genre);
    }

    pub fn update_genre(&mut self, id: &str, genre: Option<&str>) {
        match genre.map(normalize).filter(|g| !g.is_empty()) {
            Some(g) => {
                self.genres.set(id, g);
            }
            None => {
                self.genres.delete(id);
            }
        }
    }

    pub fn record_play(&mut self, id: &str) -> u32 {
        match self.play_counts.get_mut(id) {
            Some(n) => {
                *n = n.saturating_add(1);
                *n
            }
            None => {
                self.play_counts.set(id, 1);
                self.order.append(id.to_string());
                1
            }
        }
    }

    pub fn revert_play(&mut self, id: &str) {
        if let Some(n) = self.play_counts.get_mut(id) {
            *n = n.saturating_sub(1);
        }
    }

    pub fn play_count(&self, id: &str) -> u32 {
        self.play_counts.get(id).copied().unwrap_or(0)
    }

    pub fn remove(&mut self, id: &str) {
        if self.play_counts.delete(id).is_some() {
            self.order.retain(|other| other != id);
        }
        self.genres.delete(id);
    }

    /// Up to `limit` calming-genre tracks, highest play count first.
    pub fn candidates(&self, limit: usize) -> Vec<TrackId> {
        let pool: Vec<(TrackId, u32)> = self
            .order
            .iter()
            .filter(|id| {
                self.genres
                    .get(id.as_str())
                    .is_some_and(|g| self.calming.has(g))
            })
            .map(|id| (id.clone(), self.play_count(id)))
            .collect();

        merge_sort(&pool, &|a: &(TrackId, u32), b: &(TrackId, u32)| b.1.cmp(&a.1))
            .into_iter()
            .take(limit)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn clear(&mut self) {
        self.play_counts.clear();
        self.genres.clear();
        self.order.clear();
    }
}
