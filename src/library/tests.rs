use super::*;
use crate::config::TrackDisplayField;

fn track() -> Track {
    let mut t = Track::new("t1", "Song")
        .with_artist("  Artist  ")
        .with_duration(185);
    t.album = Some("Album".into());
    t.year = Some(1999);
    t.rating = Rating::new(3);
    t.play_count = 7;
    t
}

#[test]
fn display_from_fields_can_format_artist_title() {
    let t = track();
    assert_eq!(
        display_from_fields(&t, &[TrackDisplayField::Artist, TrackDisplayField::Title], " - "),
        "Artist - Song"
    );

    let no_artist = Track::new("t2", "Song");
    assert_eq!(
        display_from_fields(
            &no_artist,
            &[TrackDisplayField::Artist, TrackDisplayField::Title],
            " - "
        ),
        "Song"
    );
}

#[test]
fn display_from_fields_formats_derived_fields() {
    let t = track();
    assert_eq!(
        display_from_fields(
            &t,
            &[
                TrackDisplayField::Year,
                TrackDisplayField::Duration,
                TrackDisplayField::Rating,
                TrackDisplayField::Plays,
            ],
            " | "
        ),
        "1999 | 3:05 | *** | 7 plays"
    );
}

#[test]
fn display_from_fields_falls_back_to_title() {
    let t = Track::new("t3", "Only Title");
    assert_eq!(
        display_from_fields(&t, &[TrackDisplayField::Genre, TrackDisplayField::Album], "/"),
        "Only Title"
    );
    assert_eq!(display_from_fields(&t, &[], "/"), "Only Title");
}

#[test]
fn rating_rejects_out_of_range() {
    assert_eq!(Rating::new(0), None);
    assert_eq!(Rating::new(6), None);
    assert_eq!(Rating::new(5).map(Rating::get), Some(5));
    assert!(matches!(
        Rating::try_from(9),
        Err(crate::Error::InvalidRating(9))
    ));
}

#[test]
fn track_serializes_with_camel_case_fields() {
    let t = track();
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(json["id"], "t1");
    assert_eq!(json["durationSeconds"], 185);
    assert_eq!(json["playCount"], 7);
    assert_eq!(json["rating"], 3);
    assert!(json.get("dateAdded").is_some());
}

#[test]
fn track_deserialize_validates_rating() {
    let ok: Track = serde_json::from_str(r#"{"id":"a","title":"A","rating":5}"#).unwrap();
    assert_eq!(ok.rating, Rating::new(5));
    assert_eq!(ok.play_count, 0);

    let bad = serde_json::from_str::<Track>(r#"{"id":"a","title":"A","rating":8}"#);
    assert!(bad.is_err());
}

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize("  Daft PUNK "), "daft punk");
}
