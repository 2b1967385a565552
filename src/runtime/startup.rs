use crate::config;
use crate::library::Track;
use crate::session::Session;

/// Build a session holding every scanned track, with the playlist seeded in
/// scan order and then reordered per `[playlist]`.
pub fn seed_session(tracks: Vec<Track>, settings: config::Settings) -> Session {
    let criteria = settings.playlist.sort.clone();
    let shuffle = settings.playlist.shuffle;
    let mut session = Session::new(settings);

    for track in tracks {
        let id = track.id.clone();
        if session.add_track(track) {
            session.add_to_playlist(&id, None);
        } else {
            tracing::warn!(id = %id, "duplicate track id skipped");
        }
    }

    if !criteria.is_empty() {
        session.sort_playlist(&criteria, None);
    }
    if shuffle {
        session.shuffle_playlist();
    }
    session
}
