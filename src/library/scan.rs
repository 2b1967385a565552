use std::path::Path;

use chrono::{DateTime, Utc};
use lofty::prelude::{AudioFile, ItemKey, TaggedFileExt};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Leading four digits of a tag value such as `1997` or `1997-05-21`.
fn parse_year(raw: &str) -> Option<u16> {
    let digits: String = raw.trim().chars().take(4).collect();
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

fn non_empty(v: &str) -> Option<String> {
    let v = v.trim();
    (!v.is_empty()).then(|| v.to_string())
}

/// Read one file into a `Track`. The path doubles as the track id.
fn read_track(path: &Path, added: Option<DateTime<Utc>>) -> Track {
    let default_title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    let mut track = Track::new(path.to_string_lossy(), default_title);
    if let Some(added) = added {
        track.date_added = added;
    }

    if let Ok(tagged) = lofty::read_from_path(path) {
        let secs = tagged.properties().duration().as_secs();
        track.duration_seconds = u32::try_from(secs).unwrap_or(u32::MAX);

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.get_string(&ItemKey::TrackTitle).and_then(non_empty) {
                track.title = v;
            }
            track.artist = tag.get_string(&ItemKey::TrackArtist).and_then(non_empty);
            track.album = tag.get_string(&ItemKey::AlbumTitle).and_then(non_empty);
            track.genre = tag.get_string(&ItemKey::Genre).and_then(non_empty);
            track.year = tag.get_string(&ItemKey::Year).and_then(parse_year);
        }
    }

    track
}

/// Walk `dir` and build a track for every audio file, ordered by
/// artist then title (case-insensitive).
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if path.is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_audio_file(path, settings)
        {
            let added = entry
                .metadata()
                .ok()
                .and_then(|m| m.modified().ok())
                .map(DateTime::<Utc>::from);
            tracks.push(read_track(path, added));
        }
    }

    tracing::debug!(dir = %dir.display(), found = tracks.len(), "library scan finished");

    tracks.sort_by_cached_key(|t| {
        (
            t.artist.as_deref().unwrap_or_default().to_lowercase(),
            t.title.to_lowercase(),
        )
    });
    tracks
}
