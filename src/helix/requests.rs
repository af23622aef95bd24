//! Request parameter sets for the Helix endpoint methods
//!
//! Each struct mirrors one endpoint's optional parameters. Defaults match
//! what the API itself assumes (a page size of 20, all-inclusive video
//! filters), so `..Default::default()` spreads read like the wire defaults.

use crate::types::{PERIOD_ALL, VIDEO_SORT_TIME, VIDEO_TYPE_ALL};
use chrono::{DateTime, Utc};

/// Parameters for `get_streams` and `get_streams_metadata`
#[derive(Debug, Clone)]
pub struct StreamsRequest {
    /// Continuation token to start from
    pub after: Option<String>,
    /// Reverse continuation token to end at
    pub before: Option<String>,
    /// Restrict to streams in these communities (max 100)
    pub community_ids: Option<Vec<String>>,
    /// Objects per page (max 100)
    pub page_size: u32,
    /// Restrict to these games (max 100)
    pub game_ids: Option<Vec<String>>,
    /// Restrict to these broadcast languages (max 100)
    pub languages: Option<Vec<String>>,
    /// Restrict to these broadcasters by id (max 100)
    pub user_ids: Option<Vec<String>>,
    /// Restrict to these broadcasters by login (max 100)
    pub user_logins: Option<Vec<String>>,
}

impl Default for StreamsRequest {
    fn default() -> Self {
        Self {
            after: None,
            before: None,
            community_ids: None,
            page_size: 20,
            game_ids: None,
            languages: None,
            user_ids: None,
            user_logins: None,
        }
    }
}

/// Parameters for `get_clips`.
///
/// At least one of `broadcaster_id`, `clip_ids`, `game_id` must be supplied.
#[derive(Debug, Clone)]
pub struct ClipsRequest {
    pub broadcaster_id: Option<String>,
    pub game_id: Option<String>,
    /// Look up specific clips by id (max 100)
    pub clip_ids: Option<Vec<String>>,
    pub after: Option<String>,
    pub before: Option<String>,
    /// Only clips created at or after this instant
    pub started_at: Option<DateTime<Utc>>,
    /// Only clips created at or before this instant
    pub ended_at: Option<DateTime<Utc>>,
    /// Objects per page (max 100); only sent on broadcaster/game listings
    pub page_size: u32,
}

impl Default for ClipsRequest {
    fn default() -> Self {
        Self {
            broadcaster_id: None,
            game_id: None,
            clip_ids: None,
            after: None,
            before: None,
            started_at: None,
            ended_at: None,
            page_size: 20,
        }
    }
}

/// Parameters for `get_videos`.
///
/// `period`, `sort` and `video_type` only apply (and are only validated) on
/// the paginated user/game listing form, not on id lookups.
#[derive(Debug, Clone)]
pub struct VideosRequest {
    /// Look up specific videos by id (max 100)
    pub video_ids: Option<Vec<String>>,
    pub user_id: Option<String>,
    pub game_id: Option<String>,
    pub after: Option<String>,
    pub before: Option<String>,
    /// Objects per page (max 100)
    pub page_size: u32,
    pub language: Option<String>,
    /// One of [`PERIODS`](crate::types::PERIODS)
    pub period: String,
    /// One of [`VIDEO_SORTS`](crate::types::VIDEO_SORTS)
    pub sort: String,
    /// One of [`VIDEO_TYPES`](crate::types::VIDEO_TYPES)
    pub video_type: String,
}

impl Default for VideosRequest {
    fn default() -> Self {
        Self {
            video_ids: None,
            user_id: None,
            game_id: None,
            after: None,
            before: None,
            page_size: 20,
            language: None,
            period: PERIOD_ALL.to_string(),
            sort: VIDEO_SORT_TIME.to_string(),
            video_type: VIDEO_TYPE_ALL.to_string(),
        }
    }
}
