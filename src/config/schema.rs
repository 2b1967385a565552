use serde::Deserialize;

use crate::sort::{SortAlgorithm, SortCriterion};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/setlist/config.toml` or `~/.config/setlist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SETLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub history: HistorySettings,
    pub skips: SkipSettings,
    pub replay: ReplaySettings,
    pub ratings: RatingSettings,
    pub lookup: LookupSettings,
    pub playlist: PlaylistSettings,
    pub library: LibrarySettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Plays kept for undo. Omit for an unbounded history.
    pub capacity: Option<usize>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { capacity: Some(50) }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SkipSettings {
    /// Number of most recent skips remembered.
    pub window: usize,
}

impl Default for SkipSettings {
    fn default() -> Self {
        Self { window: 20 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReplaySettings {
    /// Genres eligible for auto-replay (case-insensitive).
    pub calming_genres: Vec<String>,
    /// Default number of replay candidates.
    pub candidates: usize,
}

impl Default for ReplaySettings {
    fn default() -> Self {
        Self {
            calming_genres: ["ambient", "classical", "jazz", "acoustic", "lo-fi"]
                .into_iter()
                .map(String::from)
                .collect(),
            candidates: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// Lowest rating that counts as a recommendation.
    pub recommend_min: u8,
    /// Default number of recommendations.
    pub recommend_limit: usize,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            recommend_min: 4,
            recommend_limit: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    /// Starting bucket count for the lookup tables.
    pub initial_capacity: usize,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            initial_capacity: crate::collections::DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Algorithm used when none is given explicitly.
    pub algorithm: SortAlgorithm,
    /// Criteria applied to the seeded playlist at startup. Empty keeps scan order.
    pub sort: Vec<SortCriterion>,
    /// Shuffle the seeded playlist at startup (after sorting).
    pub shuffle: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Id,
    Title,
    Artist,
    Album,
    Genre,
    Year,
    #[serde(alias = "length")]
    Duration,
    #[serde(alias = "stars")]
    Rating,
    #[serde(alias = "play-count", alias = "play_count")]
    Plays,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which track fields make up a report line, and in what order.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub fields: Vec<TrackDisplayField>,
    /// Separator used to join `fields`.
    pub separator: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fields: vec![TrackDisplayField::Artist, TrackDisplayField::Title],
            separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "setlist=info".to_string(),
        }
    }
}
