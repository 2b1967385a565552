use super::*;
use crate::sort::SortField;

fn track(id: &str, title: &str, artist: &str, genre: &str, secs: u32) -> Track {
    Track::new(id, title)
        .with_artist(artist)
        .with_genre(genre)
        .with_duration(secs)
}

fn session_with(tracks: &[Track]) -> Session {
    let mut s = Session::default();
    for t in tracks {
        assert!(s.add_track(t.clone()));
        assert!(s.add_to_playlist(&t.id, None));
    }
    s
}

fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

fn sample() -> Vec<Track> {
    vec![
        track("a", "Blue in Green", "Miles Davis", "Jazz", 337),
        track("b", "Windowlicker", "Aphex Twin", "Electronic", 367),
        track("c", "An Ending", "Brian Eno", "Ambient", 255),
        track("d", "So What", "Miles Davis", "Jazz", 562),
    ]
}

#[test]
fn add_track_rejects_duplicate_ids() {
    let mut s = Session::default();
    assert!(s.add_track(Track::new("x", "One")));
    assert!(!s.add_track(Track::new("x", "Other")));
    assert_eq!(s.track_count(), 1);
    assert_eq!(s.get_track("x").map(|t| t.title.as_str()), Some("One"));
}

#[test]
fn add_track_indexes_preset_rating() {
    let mut t = Track::new("x", "Rated");
    t.rating = Rating::new(3);
    let mut s = Session::default();
    s.add_track(t);
    assert_eq!(ids(&s.by_rating(3)), vec!["x"]);
}

#[test]
fn playlist_only_accepts_known_tracks() {
    let mut s = session_with(&sample());
    assert!(!s.add_to_playlist("nope", None));
    assert!(s.add_to_playlist("c", Some(0)));
    assert_eq!(ids(&s.list_playlist()), vec!["c", "a", "b", "c", "d"]);
    assert!(!s.add_to_playlist("a", Some(99)));
}

#[test]
fn playlist_move_remove_and_reverse() {
    let mut s = session_with(&sample());
    assert!(s.move_in_playlist(0, 2));
    assert_eq!(ids(&s.list_playlist()), vec!["b", "c", "a", "d"]);
    assert!(!s.move_in_playlist(0, 4));

    let removed = s.remove_from_playlist(1).unwrap();
    assert_eq!(removed.id, "c");
    assert!(s.remove_from_playlist(10).is_none());
    // Removing from the playlist leaves the library alone.
    assert!(s.get_track("c").is_some());

    s.reverse_playlist();
    assert_eq!(ids(&s.list_playlist()), vec!["d", "a", "b"]);
}

#[test]
fn sort_playlist_by_chained_criteria() {
    let mut s = session_with(&sample());
    s.rate("a", 5);
    s.rate("d", 5);
    s.rate("c", 2);

    let criteria = [
        SortCriterion::desc(SortField::Rating),
        SortCriterion::asc(SortField::Duration),
    ];
    for alg in [SortAlgorithm::Merge, SortAlgorithm::Quick, SortAlgorithm::Heap] {
        s.shuffle_playlist();
        assert!(s.sort_playlist(&criteria, Some(alg)));
        assert_eq!(ids(&s.list_playlist()), vec!["a", "d", "c", "b"], "{alg:?}");
    }
}

#[test]
fn sort_playlist_rejects_empty_criteria() {
    let mut s = session_with(&sample());
    assert!(!s.sort_playlist(&[], None));
    assert_eq!(ids(&s.list_playlist()), vec!["a", "b", "c", "d"]);
}

#[test]
fn default_sort_is_stable_merge() {
    let mut s = session_with(&sample());
    // Nothing is rated, so every pair ties and insertion order survives.
    assert!(s.sort_playlist(&[SortCriterion::asc(SortField::Rating)], None));
    assert_eq!(ids(&s.list_playlist()), vec!["a", "b", "c", "d"]);
}

#[test]
fn shuffle_keeps_the_same_tracks() {
    let mut empty = Session::default();
    assert!(!empty.shuffle_playlist());

    let mut s = session_with(&sample());
    assert!(s.shuffle_playlist());
    let mut after = ids(&s.list_playlist())
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    after.sort();
    assert_eq!(after, vec!["a", "b", "c", "d"]);
}

#[test]
fn rate_validates_and_re_rates() {
    let mut s = session_with(&sample());
    assert!(!s.rate("a", 0));
    assert!(!s.rate("a", 6));
    assert!(!s.rate("missing", 3));

    assert!(s.rate("a", 4));
    assert!(s.rate("a", 5));
    assert!(s.by_rating(4).is_empty());
    assert_eq!(ids(&s.by_rating(5)), vec!["a"]);
    assert_eq!(s.get_track("a").and_then(|t| t.rating), Rating::new(5));
    assert_eq!(s.stats().ratings.total, 1);
}

#[test]
fn rating_range_and_recommendations() {
    let mut s = session_with(&sample());
    s.rate("a", 5);
    s.rate("b", 2);
    s.rate("c", 4);
    s.rate("d", 3);

    assert_eq!(ids(&s.by_rating_range(2, 3)), vec!["b", "d"]);
    assert!(s.by_rating_range(0, 3).is_empty());
    assert!(s.by_rating_range(4, 3).is_empty());

    assert_eq!(ids(&s.recommended(None)), vec!["a", "c"]);
    assert_eq!(ids(&s.recommended(Some(1))), vec!["a"]);
    assert!(s.by_rating(9).is_empty());
}

#[test]
fn record_and_undo_plays() {
    let mut s = session_with(&sample());
    assert!(s.record_play("missing").is_none());

    s.record_play("a").unwrap();
    s.record_play("b").unwrap();
    s.record_play("a").unwrap();
    assert_eq!(s.get_track("a").unwrap().play_count, 2);

    let recent: Vec<_> = s.history(5).into_iter().map(|e| e.track_id).collect();
    assert_eq!(recent, vec!["a", "b", "a"]);

    let undone = s.undo_last_play().unwrap();
    assert_eq!(undone.track_id, "a");
    assert_eq!(s.get_track("a").unwrap().play_count, 1);
    assert_eq!(s.history(5).len(), 2);
}

#[test]
fn undo_after_track_removal_keeps_history_consistent() {
    let mut s = session_with(&sample());
    s.record_play("b");
    assert!(s.remove_track("b"));
    assert_eq!(s.history(1)[0].track_id, "b");
    let undone = s.undo_last_play().unwrap();
    assert_eq!(undone.track_id, "b");
    assert!(s.undo_last_play().is_none());
}

#[test]
fn history_is_bounded_by_settings() {
    let mut settings = Settings::default();
    settings.history.capacity = Some(2);
    let mut s = Session::new(settings);
    for t in sample() {
        s.add_track(t);
    }
    s.record_play("a");
    s.record_play("b");
    s.record_play("c");
    let recent: Vec<_> = s.history(10).into_iter().map(|e| e.track_id).collect();
    assert_eq!(recent, vec!["c", "b"]);
}

#[test]
fn skips_slide_out_of_the_window() {
    let mut settings = Settings::default();
    settings.skips.window = 2;
    let mut s = Session::new(settings);
    for t in sample() {
        s.add_track(t);
    }
    assert!(!s.record_skip("missing"));
    assert!(s.record_skip("a"));
    assert!(s.record_skip("b"));
    assert!(s.record_skip("c"));
    assert!(!s.was_recently_skipped("a"));
    assert!(s.was_recently_skipped("b"));
    assert!(s.was_recently_skipped("c"));
    assert_eq!(s.skip_count("c"), 1);
}

#[test]
fn replay_candidates_follow_play_counts() {
    let mut s = session_with(&sample());
    s.record_play("c");
    s.record_play("d");
    s.record_play("d");
    s.record_play("b");
    s.record_play("b");
    s.record_play("b");

    // "b" is electronic and never a candidate.
    assert_eq!(ids(&s.replay_candidates(None)), vec!["d", "c", "a"]);
    assert_eq!(ids(&s.replay_candidates(Some(1))), vec!["d"]);

    for _ in 0..5 {
        s.undo_last_play();
    }
    assert_eq!(ids(&s.replay_candidates(Some(1))), vec!["c"]);
}

#[test]
fn update_track_refreshes_lookups_and_replay() {
    let mut s = session_with(&sample());
    s.rate("b", 4);
    s.record_play("b");

    let mut edited = s.get_track("b").unwrap().clone();
    edited.title = "Girl/Boy Song".into();
    edited.genre = Some("Ambient".into());
    edited.play_count = 99;
    edited.rating = None;
    assert!(s.update_track(&edited));

    let stored = s.get_track("b").unwrap();
    assert_eq!(stored.title, "Girl/Boy Song");
    assert_eq!(stored.play_count, 1);
    assert_eq!(stored.rating, Rating::new(4));
    assert!(s.find_by_title("windowlicker").is_none());
    assert_eq!(s.find_by_title(" girl/boy song ").map(|t| t.id.as_str()), Some("b"));
    assert!(ids(&s.replay_candidates(Some(10))).contains(&"b"));

    assert!(!s.update_track(&Track::new("missing", "x")));
}

#[test]
fn remove_track_clears_every_index() {
    let mut s = session_with(&sample());
    s.add_to_playlist("a", None);
    s.rate("a", 5);
    s.record_skip("a");
    s.record_play("a");

    assert!(s.remove_track("a"));
    assert!(!s.remove_track("a"));
    assert!(s.get_track("a").is_none());
    assert_eq!(ids(&s.list_playlist()), vec!["b", "c", "d"]);
    assert!(s.by_rating(5).is_empty());
    assert!(!s.was_recently_skipped("a"));
    assert!(!ids(&s.replay_candidates(Some(10))).contains(&"a"));
    let miles: Vec<_> = s.find_by_artist("miles davis").iter().map(|t| t.id.clone()).collect();
    assert_eq!(miles, vec!["d"]);
}

#[test]
fn find_by_artist_is_case_insensitive() {
    let s = session_with(&sample());
    let found: Vec<_> = s
        .find_by_artist("MILES DAVIS")
        .into_iter()
        .map(|t| t.id.clone())
        .collect();
    assert_eq!(found, vec!["a", "d"]);
}

#[test]
fn stats_and_reset() {
    let mut s = session_with(&sample());
    s.rate("a", 4);
    s.rate("b", 2);
    s.record_play("a");
    s.record_skip("c");

    let stats = s.stats();
    assert_eq!(stats.tracks, 4);
    assert_eq!(stats.playlist_length, 4);
    assert_eq!(stats.ratings.counts, [0, 1, 0, 1, 0]);
    assert_eq!(stats.ratings.average, Some(3.0));
    assert_eq!(stats.history_length, 1);
    assert_eq!(stats.recent_skips, 1);
    assert_eq!(stats.lookup.by_id.size, 4);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["playlistLength"], 4);

    s.reset();
    let stats = s.stats();
    assert_eq!(stats.tracks, 0);
    assert_eq!(stats.playlist_length, 0);
    assert_eq!(stats.ratings.total, 0);
    assert_eq!(stats.history_length, 0);
    assert_eq!(s.settings().skips.window, 20);
}
