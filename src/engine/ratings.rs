//! Rating buckets over the rating tree.
//!
//! The tree answers "which tracks have rating r"; the side table answers
//! "what rating does track x have" so re-rating can find the old bucket.

use serde::Serialize;

use crate::collections::{ChainedHashTable, RatingTree};
use crate::library::{Rating, TrackId};

/// Per-rating counts, index 0 holding rating 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RatingDistribution {
    pub counts: [usize; 5],
    pub total: usize,
    pub average: Option<f64>,
}

#[derive(Debug, Default)]
pub struct RatingIndex {
    tree: RatingTree<TrackId>,
    ratings: ChainedHashTable<Rating>,
}

impl RatingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `rating` for `id`. A previous rating is removed first, so the
    /// latest call wins.
    pub fn insert_song(&mut self, id: &str, rating: Rating) {
        if let Some(old) = self.ratings.get(id).copied() {
            if old == rating {
                return;
            }
            self.tree.delete_value(old.get(), &id.to_string());
        }
        self.tree.insert(rating.get(), id.to_string());
        self.ratings.set(id, rating);
        tracing::trace!(id, rating = rating.get(), "rating indexed");
    }

    /// Forget the rating for `id`. Returns the rating it had.
    pub fn remove_song(&mut self, id: &str) -> Option<Rating> {
        let old = self.ratings.delete(id)?;
        self.tree.delete_value(old.get(), &id.to_string());
        Some(old)
    }

    pub fn rating_of(&self, id: &str) -> Option<Rating> {
        self.ratings.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn songs_with_rating(&self, rating: Rating) -> Vec<TrackId> {
        self.tree
            .search_by_key(rating.get())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn songs_at_least(&self, rating: Rating) -> Vec<TrackId> {
        self.tree
            .values_with_key_at_least(rating.get())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn songs_at_most(&self, rating: Rating) -> Vec<TrackId> {
        self.tree
            .values_with_key_at_most(rating.get())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Every rated track, highest rating first.
    pub fn ranked(&self) -> Vec<TrackId> {
        self.tree.descending().into_iter().cloned().collect()
    }

    pub fn distribution(&self) -> RatingDistribution {
        let mut counts = [0usize; 5];
        let mut sum = 0usize;
        for r in Rating::MIN..=Rating::MAX {
            let n = self.tree.search_by_key(r).len();
            counts[usize::from(r - Rating::MIN)] = n;
            sum += n * usize::from(r);
        }
        let total = self.tree.total_count();
        RatingDistribution {
            counts,
            total,
            average: (total > 0).then(|| sum as f64 / total as f64),
        }
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
        self.ratings.clear();
    }
}
