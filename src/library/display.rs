use crate::config::TrackDisplayField;

use super::model::Track;

/// Build a display string for a track according to the provided `fields` and separator.
///
/// Empty or missing fields are skipped. Falls back to `title` when no parts
/// were produced.
pub fn display_from_fields(track: &Track, fields: &[TrackDisplayField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackDisplayField::Id => parts.push(track.id.clone()),
            TrackDisplayField::Title => {
                if !track.title.trim().is_empty() {
                    parts.push(track.title.trim().to_string());
                }
            }
            TrackDisplayField::Artist => push_trimmed(&mut parts, track.artist.as_deref()),
            TrackDisplayField::Album => push_trimmed(&mut parts, track.album.as_deref()),
            TrackDisplayField::Genre => push_trimmed(&mut parts, track.genre.as_deref()),
            TrackDisplayField::Year => {
                if let Some(y) = track.year {
                    parts.push(y.to_string());
                }
            }
            TrackDisplayField::Duration => {
                let s = track.duration_seconds;
                parts.push(format!("{}:{:02}", s / 60, s % 60));
            }
            TrackDisplayField::Rating => {
                if let Some(r) = track.rating {
                    let stars = usize::from(r.get());
                    parts.push("*".repeat(stars));
                }
            }
            TrackDisplayField::Plays => parts.push(format!("{} plays", track.play_count)),
        }
    }

    if parts.is_empty() {
        track.title.clone()
    } else {
        parts.join(sep)
    }
}

fn push_trimmed(parts: &mut Vec<String>, value: Option<&str>) {
    if let Some(v) = value.map(str::trim).filter(|s| !s.is_empty()) {
        parts.push(v.to_string());
    }
}
