//! The façade that owns every engine.
//!
//! `Session` only sequences calls across engines (rating a track touches both
//! the rating index and the stored record, removing a track touches all of
//! them). It holds no algorithmic logic of its own. Build one per logical
//! session and pass it by reference; a multi-threaded host must wrap it in a
//! lock since nothing here synchronizes.

use std::cmp::Ordering;

use serde::Serialize;

use crate::config::Settings;
use crate::engine::{
    HistoryStack, LookupIndex, LookupStats, PlaylistIndex, RatingDistribution, RatingIndex,
    ReplaySelector, SkipTracker,
};
use crate::library::{PlayEntry, Rating, Track};
use crate::sort::{SortAlgorithm, SortCriterion, chained};

/// Aggregate counters for the excluded REST layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub tracks: usize,
    pub playlist_length: usize,
    pub ratings: RatingDistribution,
    pub rating_tree_height: usize,
    pub history_length: usize,
    pub recent_skips: usize,
    pub lookup: LookupStats,
}

#[derive(Debug)]
pub struct Session {
    settings: Settings,
    lookup: LookupIndex,
    playlist: PlaylistIndex,
    ratings: RatingIndex,
    history: HistoryStack,
    skips: SkipTracker,
    replay: ReplaySelector,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            lookup: LookupIndex::with_capacity(settings.lookup.initial_capacity),
            playlist: PlaylistIndex::new(),
            ratings: RatingIndex::new(),
            history: HistoryStack::new(settings.history.capacity),
            skips: SkipTracker::new(settings.skips.window),
            replay: ReplaySelector::new(&settings.replay.calming_genres),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Drop all state and rebuild empty engines from the same settings.
    pub fn reset(&mut self) {
        let settings = std::mem::take(&mut self.settings);
        *self = Self::new(settings);
        tracing::debug!("session reset");
    }

    // --- tracks ------------------------------------------------------------

    /// Store a new track. Fails if the id is already known.
    pub fn add_track(&mut self, track: Track) -> bool {
        let id = track.id.clone();
        let genre = track.genre.clone();
        let rating = track.rating;
        let plays = track.play_count;
        if !self.lookup.insert(track) {
            return false;
        }
        self.replay.register(&id, genre.as_deref(), plays);
        if let Some(r) = rating {
            self.ratings.insert_song(&id, r);
        }
        tracing::debug!(id = %id, "track added");
        true
    }

    /// Remove a track from every index. Play history keeps its entries.
    pub fn remove_track(&mut self, id: &str) -> bool {
        if self.lookup.remove(id).is_none() {
            return false;
        }
        self.ratings.remove_song(id);
        self.replay.remove(id);
        self.skips.forget(id);
        let dropped = self.playlist.remove_track(id);
        tracing::debug!(id, dropped, "track removed");
        true
    }

    pub fn get_track(&self, id: &str) -> Option<&Track> {
        self.lookup.get(id)
    }

    /// Replace a known track's metadata. Rating, play count and date added
    /// are left to their own operations.
    pub fn update_track(&mut self, track: &Track) -> bool {
        if !self.lookup.update(track) {
            return false;
        }
        self.replay.update_genre(&track.id, track.genre.as_deref());
        true
    }

    pub fn track_count(&self) -> usize {
        self.lookup.len()
    }

    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.lookup.tracks()
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Track> {
        self.lookup.find_by_title(title)
    }

    pub fn find_by_artist(&self, artist: &str) -> Vec<&Track> {
        self.lookup.find_by_artist(artist)
    }

    // --- playlist ----------------------------------------------------------

    /// Put a known track into the playlist, appending when `position` is `None`.
    pub fn add_to_playlist(&mut self, id: &str, position: Option<usize>) -> bool {
        if !self.lookup.contains(id) {
            return false;
        }
        self.playlist.add(id, position)
    }

    pub fn remove_from_playlist(&mut self, index: usize) -> Option<Track> {
        let id = self.playlist.remove_at(index)?;
        self.lookup.get(&id).cloned()
    }

    pub fn move_in_playlist(&mut self, from: usize, to: usize) -> bool {
        self.playlist.move_track(from, to)
    }

    pub fn reverse_playlist(&mut self) {
        self.playlist.reverse();
    }

    /// Sort by `criteria`, falling back to the configured algorithm. An
    /// empty criteria list is rejected.
    pub fn sort_playlist(
        &mut self,
        criteria: &[SortCriterion],
        algorithm: Option<SortAlgorithm>,
    ) -> bool {
        if criteria.is_empty() {
            return false;
        }
        let algorithm = algorithm.unwrap_or(self.settings.playlist.algorithm);
        let cmp = chained(criteria);
        let lookup = &self.lookup;
        self.playlist.sort_by(algorithm, |a, b| {
            match (lookup.get(a), lookup.get(b)) {
                (Some(x), Some(y)) => cmp(x, y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
        tracing::debug!(?algorithm, criteria = criteria.len(), "playlist sorted");
        true
    }

    /// Shuffle the playlist. Fails on an empty playlist.
    pub fn shuffle_playlist(&mut self) -> bool {
        if self.playlist.is_empty() {
            return false;
        }
        self.playlist.shuffle();
        true
    }

    pub fn list_playlist(&self) -> Vec<Track> {
        self.playlist
            .iter()
            .filter_map(|id| self.lookup.get(id).cloned())
            .collect()
    }

    pub fn playlist_len(&self) -> usize {
        self.playlist.len()
    }

    // --- ratings -----------------------------------------------------------

    /// Rate a known track `1..=5`. The latest rating replaces any earlier one.
    pub fn rate(&mut self, id: &str, rating: u8) -> bool {
        let Some(rating) = Rating::new(rating) else {
            return false;
        };
        if !self.lookup.set_rating(id, Some(rating)) {
            return false;
        }
        self.ratings.insert_song(id, rating);
        true
    }

    pub fn by_rating(&self, rating: u8) -> Vec<Track> {
        match Rating::new(rating) {
            Some(r) => self.resolve(self.ratings.songs_with_rating(r)),
            None => Vec::new(),
        }
    }

    /// Tracks rated within `min..=max`, ascending by rating.
    pub fn by_rating_range(&self, min: u8, max: u8) -> Vec<Track> {
        let (Some(lo), Some(hi)) = (Rating::new(min), Rating::new(max)) else {
            return Vec::new();
        };
        let ids = self.ratings.songs_at_least(lo);
        self.resolve(
            ids.into_iter()
                .filter(|id| self.ratings.rating_of(id).is_some_and(|r| r <= hi))
                .collect(),
        )
    }

    /// Highest-rated tracks at or above `ratings.recommend_min`.
    pub fn recommended(&self, limit: Option<usize>) -> Vec<Track> {
        let limit = limit.unwrap_or(self.settings.ratings.recommend_limit);
        let min = self.settings.ratings.recommend_min;
        let ids = self
            .ratings
            .ranked()
            .into_iter()
            .filter(|id| self.ratings.rating_of(id).is_some_and(|r| r.get() >= min))
            .take(limit)
            .collect();
        self.resolve(ids)
    }

    // --- history & skips ---------------------------------------------------

    /// Count a play of a known track and push it onto the history.
    pub fn record_play(&mut self, id: &str) -> Option<PlayEntry> {
        self.lookup.record_play(id)?;
        self.replay.record_play(id);
        let entry = PlayEntry::now(id);
        self.history.push(entry.clone());
        Some(entry)
    }

    /// Pop the last play and take back its count. Counts are left alone if
    /// the track has been removed since.
    pub fn undo_last_play(&mut self) -> Option<PlayEntry> {
        let entry = self.history.undo()?;
        if self.lookup.revert_play(&entry.track_id).is_some() {
            self.replay.revert_play(&entry.track_id);
        }
        Some(entry)
    }

    /// Up to `n` most recent plays, newest first.
    pub fn history(&self, n: usize) -> Vec<PlayEntry> {
        self.history.recent(n)
    }

    pub fn record_skip(&mut self, id: &str) -> bool {
        if !self.lookup.contains(id) {
            return false;
        }
        self.skips.record_skip(id);
        true
    }

    pub fn was_recently_skipped(&self, id: &str) -> bool {
        self.skips.was_recently_skipped(id)
    }

    pub fn skip_count(&self, id: &str) -> u32 {
        self.skips.skip_count(id)
    }

    /// Calming-genre tracks for auto-replay, most played first.
    pub fn replay_candidates(&self, limit: Option<usize>) -> Vec<Track> {
        let limit = limit.unwrap_or(self.settings.replay.candidates);
        self.resolve(self.replay.candidates(limit))
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            tracks: self.lookup.len(),
            playlist_length: self.playlist.len(),
            ratings: self.ratings.distribution(),
            rating_tree_height: self.ratings.height(),
            history_length: self.history.len(),
            recent_skips: self.skips.len(),
            lookup: self.lookup.stats(),
        }
    }

    fn resolve(&self, ids: Vec<String>) -> Vec<Track> {
        ids.iter()
            .filter_map(|id| self.lookup.get(id).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests;
