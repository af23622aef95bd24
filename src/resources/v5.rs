//! v5 (Kraken) resource records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Community {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub owner_id: Option<String>,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub description_html: Option<String>,
    pub rules: Option<String>,
    pub rules_html: Option<String>,
    pub language: Option<String>,
    pub avatar_image_url: Option<String>,
    pub cover_image_url: Option<String>,
}

/// A channel as the v5 API reports it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    /// Numeric in v5, unlike the string ids Helix uses
    #[serde(rename = "_id")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub status: Option<String>,
    pub game: Option<String>,
    pub language: Option<String>,
    pub broadcaster_language: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub followers: Option<u64>,
    pub views: Option<u64>,
    pub url: Option<String>,
    pub logo: Option<String>,
    pub mature: Option<bool>,
    pub partner: Option<bool>,
}

/// A team of channels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub info: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub logo: Option<String>,
    pub banner: Option<String>,
    pub background: Option<String>,
}
