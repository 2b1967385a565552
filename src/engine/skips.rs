//! Sliding window of recently skipped tracks.
//!
//! The count table mirrors the queue contents exactly: whenever the queue
//! evicts an id, that id's count goes down with it.

use crate::collections::{ChainedHashTable, CircularQueue};
use crate::library::TrackId;

#[derive(Debug)]
pub struct SkipTracker {
    window: CircularQueue<TrackId>,
    counts: ChainedHashTable<u32>,
}

impl SkipTracker {
    pub fn new(window: usize) -> Self {
        Self {
            window: CircularQueue::new(window),
            counts: ChainedHashTable::new(),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn record_skip(&mut self, id: &str) {
        if let Some(evicted) = self.window.enqueue(id.to_string()) {
            self.decrement(&evicted);
        }
        match self.counts.get_mut(id) {
            Some(n) => *n += 1,
            None => {
                self.counts.set(id, 1);
            }
        }
    }

    pub fn was_recently_skipped(&self, id: &str) -> bool {
        self.counts.has(id)
    }

    /// Skips of `id` still inside the window.
    pub fn skip_count(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Window contents, oldest first.
    pub fn recent(&self) -> Vec<TrackId> {
        self.window.to_vec()
    }

    /// Drop `id` from the window and the counts. Used when a track leaves
    /// the library.
    pub fn forget(&mut self, id: &str) {
        if self.counts.delete(id).is_none() {
            return;
        }
        let mut kept = CircularQueue::new(self.window.capacity());
        while let Some(entry) = self.window.dequeue() {
            if entry != id {
                kept.enqueue(entry);
            }
        }
        self.window = kept;
    }

    pub fn clear(&mut self) {
        self.window.clear();
        self.counts.clear();
    }

    fn decrement(&mut self, id: &str) {
        let remaining = match self.counts.get_mut(id) {
            Some(n) => {
                *n = n.saturating_sub(1);
                *n
            }
            None => return,
        };
        if remaining == 0 {
            self.counts.delete(id);
        }
        tracing::trace!(id, remaining, "skip aged out of window");
    }
}
