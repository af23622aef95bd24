//! Shared constants used throughout the crate
//!
//! Base endpoints for the two API surfaces plus the valid sets for
//! enum-valued query parameters.

// ============================================================================
// Base URLs
// ============================================================================

/// Base URL for the v5 (Kraken) API
pub const BASE_URL: &str = "https://api.twitch.tv/kraken/";

/// Base URL for the Helix API
pub const BASE_HELIX_URL: &str = "https://api.twitch.tv/helix/";

/// Base URL for the OAuth token endpoint
pub const BASE_OAUTH_URL: &str = "https://id.twitch.tv/oauth2/";

// ============================================================================
// Video periods
// ============================================================================

/// Period covering all time
pub const PERIOD_ALL: &str = "all";
/// Period covering the last day
pub const PERIOD_DAY: &str = "day";
/// Period covering the last week
pub const PERIOD_WEEK: &str = "week";
/// Period covering the last month
pub const PERIOD_MONTH: &str = "month";

/// Valid values for the video `period` parameter
pub const PERIODS: [&str; 4] = [PERIOD_ALL, PERIOD_DAY, PERIOD_WEEK, PERIOD_MONTH];

// ============================================================================
// Video sort orders
// ============================================================================

/// Sort videos by creation time
pub const VIDEO_SORT_TIME: &str = "time";
/// Sort videos by trending score
pub const VIDEO_SORT_TRENDING: &str = "trending";
/// Sort videos by view count
pub const VIDEO_SORT_VIEWS: &str = "views";

/// Valid values for the video `sort` parameter
pub const VIDEO_SORTS: [&str; 3] = [VIDEO_SORT_TIME, VIDEO_SORT_TRENDING, VIDEO_SORT_VIEWS];

// ============================================================================
// Video types
// ============================================================================

/// All video types
pub const VIDEO_TYPE_ALL: &str = "all";
/// Uploaded videos
pub const VIDEO_TYPE_UPLOAD: &str = "upload";
/// Past broadcasts
pub const VIDEO_TYPE_ARCHIVE: &str = "archive";
/// Highlight reels
pub const VIDEO_TYPE_HIGHLIGHT: &str = "highlight";

/// Valid values for the video `type` parameter
pub const VIDEO_TYPES: [&str; 4] = [
    VIDEO_TYPE_ALL,
    VIDEO_TYPE_UPLOAD,
    VIDEO_TYPE_ARCHIVE,
    VIDEO_TYPE_HIGHLIGHT,
];
