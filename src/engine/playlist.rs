//! Ordered track sequence.

use std::cmp::Ordering;

use rand::Rng;

use crate::collections::OrderedList;
use crate::library::TrackId;
use crate::sort::SortAlgorithm;

#[derive(Debug, Default)]
pub struct PlaylistIndex {
    entries: OrderedList<TrackId>,
}

impl PlaylistIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at `position`, or append when `None`. `position == len()` is
    /// also an append.
    pub fn add(&mut self, id: impl Into<TrackId>, position: Option<usize>) -> bool {
        match position {
            None => {
                self.entries.append(id.into());
                true
            }
            Some(i) => self.entries.insert_at(i, id.into()),
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<TrackId> {
        self.entries.remove_at(index)
    }

    /// Drop every occurrence of `id`. Returns how many entries went away.
    pub fn remove_track(&mut self, id: &str) -> usize {
        self.entries.retain(|entry| entry != id)
    }

    pub fn move_track(&mut self, from: usize, to: usize) -> bool {
        self.entries.move_item(from, to)
    }

    pub fn reverse(&mut self) {
        self.entries.reverse();
    }

    pub fn get(&self, index: usize) -> Option<&TrackId> {
        self.entries.get(index)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    pub fn ids(&self) -> Vec<TrackId> {
        self.entries.to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackId> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Reorder with `algorithm`. The list is copied out, sorted, cleared and
    /// rebuilt rather than relinked in place.
    pub fn sort_by<F>(&mut self, algorithm: SortAlgorithm, cmp: F)
    where
        F: Fn(&TrackId, &TrackId) -> Ordering,
    {
        let sorted = algorithm.sort(&self.entries.to_vec(), &cmp);
        self.rebuild(sorted);
    }

    /// Fisher-Yates shuffle using the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) {
        let mut ids = self.entries.to_vec();
        for i in (1..ids.len()).rev() {
            let j = rng.random_range(0..=i);
            ids.swap(i, j);
        }
        self.rebuild(ids);
    }

    fn rebuild(&mut self, ids: Vec<TrackId>) {
        self.entries.clear();
        for id in ids {
            self.entries.append(id);
        }
    }
}
