use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Stable track identity. Indices other than the lookup store hold these.
pub type TrackId = String;

/// A star rating in `1..=5`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(Error::InvalidRating(value))
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> Self {
        r.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub duration_seconds: u32,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub play_count: u32,
    #[serde(default = "Utc::now")]
    pub date_added: DateTime<Utc>,
}

impl Track {
    /// A track with only identity and title set, added now.
    pub fn new(id: impl Into<TrackId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            album: None,
            duration_seconds: 0,
            genre: None,
            year: None,
            rating: None,
            play_count: 0,
            date_added: Utc::now(),
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Overwrite the user-editable metadata from `other`, leaving identity,
    /// rating, play count and date added alone.
    pub(crate) fn apply_metadata(&mut self, other: &Track) {
        self.title = other.title.clone();
        self.artist = other.artist.clone();
        self.album = other.album.clone();
        self.duration_seconds = other.duration_seconds;
        self.genre = other.genre.clone();
        self.year = other.year;
    }
}

/// One entry in the play history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayEntry {
    pub track_id: TrackId,
    pub played_at: DateTime<Utc>,
}

impl PlayEntry {
    pub fn now(track_id: impl Into<TrackId>) -> Self {
        Self {
            track_id: track_id.into(),
            played_at: Utc::now(),
        }
    }
}

/// Lowercased, trimmed form used for title/artist lookups.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
