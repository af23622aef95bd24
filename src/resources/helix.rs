//! Helix resource records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A live stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stream {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub game_id: Option<String>,
    pub community_ids: Vec<String>,
    /// Stream type, `"live"` or `""` (an error state)
    #[serde(rename = "type")]
    pub stream_type: Option<String>,
    pub title: Option<String>,
    pub viewer_count: Option<u64>,
    pub started_at: Option<DateTime<Utc>>,
    pub language: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// A game or category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: Option<String>,
    pub name: Option<String>,
    pub box_art_url: Option<String>,
}

/// A clip taken from a stream or video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clip {
    pub id: Option<String>,
    pub url: Option<String>,
    pub embed_url: Option<String>,
    pub broadcaster_id: Option<String>,
    pub creator_id: Option<String>,
    pub video_id: Option<String>,
    pub game_id: Option<String>,
    pub language: Option<String>,
    pub title: Option<String>,
    pub view_count: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub thumbnail_url: Option<String>,
}

/// A published video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub viewable: Option<String>,
    pub view_count: Option<u64>,
    pub language: Option<String>,
    /// Video type, one of `upload`, `archive`, `highlight`
    #[serde(rename = "type")]
    pub video_type: Option<String>,
    /// Duration in the API's own shorthand, e.g. `"3h8m33s"`
    pub duration: Option<String>,
}

/// A user account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<String>,
    pub login: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    pub broadcaster_type: Option<String>,
    pub description: Option<String>,
    pub profile_image_url: Option<String>,
    pub offline_image_url: Option<String>,
    pub view_count: Option<u64>,
    /// Only present when the token carries the `user:read:email` scope
    pub email: Option<String>,
}

/// A stream tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub tag_id: Option<String>,
    pub is_auto: Option<bool>,
    /// Tag name keyed by locale code
    pub localization_names: HashMap<String, String>,
    /// Tag description keyed by locale code
    pub localization_descriptions: HashMap<String, String>,
}

/// A follow relationship between two users
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Follow {
    pub from_id: Option<String>,
    pub to_id: Option<String>,
    pub followed_at: Option<DateTime<Utc>>,
}

/// Game-specific metadata attached to a live stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamMetadata {
    pub user_id: Option<String>,
    pub game_id: Option<String>,
    /// Hero metadata when the stream is Overwatch, raw as returned
    pub overwatch: Option<Value>,
    /// Hero metadata when the stream is Hearthstone, raw as returned
    pub hearthstone: Option<Value>,
}
