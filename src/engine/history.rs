//! Play history with undo.

use crate::collections::BoundedStack;
use crate::library::PlayEntry;

#[derive(Debug, Default)]
pub struct HistoryStack {
    entries: BoundedStack<PlayEntry>,
}

impl HistoryStack {
    /// `None` keeps every play.
    pub fn new(capacity: Option<usize>) -> Self {
        let entries = match capacity {
            Some(cap) => BoundedStack::with_capacity(cap),
            None => BoundedStack::unbounded(),
        };
        Self { entries }
    }

    pub fn push(&mut self, entry: PlayEntry) -> Option<PlayEntry> {
        let evicted = self.entries.push(entry);
        if let Some(old) = &evicted {
            tracing::trace!(track = %old.track_id, "history full, dropped oldest play");
        }
        evicted
    }

    /// Pop the most recent play.
    pub fn undo(&mut self) -> Option<PlayEntry> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&PlayEntry> {
        self.entries.peek()
    }

    /// Up to `n` most recent plays, newest first.
    pub fn recent(&self, n: usize) -> Vec<PlayEntry> {
        self.entries.iter().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.entries.capacity()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
