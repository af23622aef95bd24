//! Tests for resource decoding

use super::*;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_decode_stream() {
    let raw = json!({
        "id": "26007494656",
        "user_id": "23161357",
        "user_name": "LIRIK",
        "game_id": "417752",
        "community_ids": ["848d95be-90b3-44a5-b143-6e373754c382"],
        "type": "live",
        "title": "Hey Guys",
        "viewer_count": 32575,
        "started_at": "2017-08-14T16:08:32Z",
        "language": "en",
        "thumbnail_url": "https://static-cdn.jtvnw.net/previews-ttv/live_user_lirik-{width}x{height}.jpg"
    });

    let stream: Stream = decode_record(raw).unwrap();
    assert_eq!(stream.id.as_deref(), Some("26007494656"));
    assert_eq!(stream.stream_type.as_deref(), Some("live"));
    assert_eq!(stream.viewer_count, Some(32575));
    assert_eq!(
        stream.started_at,
        Some(Utc.with_ymd_and_hms(2017, 8, 14, 16, 8, 32).unwrap())
    );
}

#[test]
fn test_decode_tolerates_missing_fields() {
    let game: Game = decode_record(json!({"name": "Overwatch"})).unwrap();
    assert_eq!(
        game,
        Game {
            id: None,
            name: Some("Overwatch".to_string()),
            box_art_url: None,
        }
    );

    // Entirely empty objects decode to all-absent records.
    let stream: Stream = decode_record(json!({})).unwrap();
    assert_eq!(stream, Stream::default());
    assert!(stream.community_ids.is_empty());
}

#[test]
fn test_decode_ignores_unknown_fields() {
    let user: User = decode_record(json!({
        "id": "44322889",
        "login": "dallas",
        "some_future_field": {"nested": true}
    }))
    .unwrap();

    assert_eq!(user.login.as_deref(), Some("dallas"));
}

#[test]
fn test_decode_tag_localizations() {
    let tag: Tag = decode_record(json!({
        "tag_id": "621fb5bf-5498-4d8f-b4ac-db4d40d401bf",
        "is_auto": false,
        "localization_names": {"en-us": "Speedrun", "de-de": "Speedrun"},
        "localization_descriptions": {"en-us": "Completing a game as fast as possible"}
    }))
    .unwrap();

    assert_eq!(tag.localization_names.len(), 2);
    assert_eq!(
        tag.localization_names.get("en-us").map(String::as_str),
        Some("Speedrun")
    );
}

#[test]
fn test_decode_v5_renamed_ids() {
    let community: Community = decode_record(json!({
        "_id": "e9f17055-810f-4744-ba3d-10d5bed88e1b",
        "name": "DallasTesterCommunity"
    }))
    .unwrap();
    assert_eq!(
        community.id.as_deref(),
        Some("e9f17055-810f-4744-ba3d-10d5bed88e1b")
    );

    let team: Team = decode_record(json!({"_id": 10, "name": "staff"})).unwrap();
    assert_eq!(team.id, Some(10));
}

#[test]
fn test_decode_record_type_mismatch_is_an_error() {
    let err = decode_record::<Stream>(json!({"viewer_count": "not-a-number"})).unwrap_err();
    assert!(matches!(err, crate::error::Error::Decode { .. }));
}

#[test]
fn test_decode_keyed_list() {
    let body = json!({
        "channels": [
            {"_id": 44322889, "name": "dallas"},
            {"_id": 129454141, "name": "dallasnchains"}
        ]
    });

    let channels: Vec<Channel> = decode_keyed_list(&body, "channels").unwrap();
    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].id, Some(44322889));
}

#[test]
fn test_decode_keyed_list_null_or_missing_is_empty() {
    let body = json!({"channels": null});
    let channels: Vec<Channel> = decode_keyed_list(&body, "channels").unwrap();
    assert!(channels.is_empty());

    let body = json!({});
    let channels: Vec<Channel> = decode_keyed_list(&body, "channels").unwrap();
    assert!(channels.is_empty());
}

#[test]
fn test_decode_keyed_list_wrong_shape_is_an_error() {
    let body = json!({"channels": "nope"});
    let err = decode_keyed_list::<Channel>(&body, "channels").unwrap_err();
    assert!(matches!(err, crate::error::Error::Decode { .. }));
}
