//! Helix API surface
//!
//! [`HelixClient`] holds the credentials and one HTTP client configured with
//! the Helix base URL and auth headers. Each endpoint method validates its
//! arguments, builds the query, and hands off to either the single-page
//! fetcher or a [`Cursor`] — paginated methods return a fresh cursor without
//! touching the network.

mod requests;

pub use requests::{ClipsRequest, StreamsRequest, VideosRequest};

use crate::auth::{self, Credentials};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{fetch_page, Cursor};
use crate::query::Query;
use crate::resources::{Clip, Follow, Game, Stream, StreamMetadata, Tag, User, Video};
use crate::types::{BASE_HELIX_URL, BASE_OAUTH_URL, PERIODS, VIDEO_SORTS, VIDEO_TYPES};
use crate::validate;
use chrono::SecondsFormat;
use std::time::Duration;

/// Client for the Helix API
#[derive(Debug, Clone)]
pub struct HelixClient {
    http: HttpClient,
    credentials: Credentials,
    base_url: String,
    oauth_url: String,
    timeout: Duration,
}

impl HelixClient {
    /// Create a client with default endpoints
    pub fn new(credentials: Credentials) -> Self {
        Self::builder(credentials).build()
    }

    /// Create a client builder
    pub fn builder(credentials: Credentials) -> HelixClientBuilder {
        HelixClientBuilder {
            credentials,
            base_url: BASE_HELIX_URL.to_string(),
            oauth_url: BASE_OAUTH_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// The credentials this client was built with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn build_http(credentials: &Credentials, base_url: &str, timeout: Duration) -> HttpClient {
        let mut builder = HttpClientConfig::builder()
            .base_url(base_url)
            .timeout(timeout)
            .header("Client-ID", credentials.client_id.clone());
        if let Some(token) = &credentials.oauth_token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        HttpClient::with_config(builder.build())
    }

    // ============================================================================
    // Token acquisition
    // ============================================================================

    /// Obtain an app access token via the client-credentials grant.
    ///
    /// Requires the client secret. The token is stored on the client, so
    /// requests issued afterwards carry it; cursors created earlier keep the
    /// auth context they were built with.
    pub async fn get_oauth_token(&mut self) -> Result<String> {
        let token_url = format!("{}/token", self.oauth_url.trim_end_matches('/'));
        let token = auth::fetch_app_access_token(&self.http, &self.credentials, &token_url).await?;

        self.credentials.oauth_token = Some(token.clone());
        self.http = Self::build_http(&self.credentials, &self.base_url, self.timeout);
        Ok(token)
    }

    // ============================================================================
    // Streams
    // ============================================================================

    /// List live streams, most-watched first
    pub fn get_streams(&self, request: StreamsRequest) -> Result<Cursor<Stream>> {
        Self::validate_streams_request(&request)?;
        let query = Self::streams_query("streams", &request);
        Ok(Cursor::new(self.http.clone(), query))
    }

    /// List game-specific metadata for live streams
    pub fn get_streams_metadata(&self, request: StreamsRequest) -> Result<Cursor<StreamMetadata>> {
        Self::validate_streams_request(&request)?;
        let query = Self::streams_query("streams/metadata", &request);
        Ok(Cursor::new(self.http.clone(), query))
    }

    fn validate_streams_request(request: &StreamsRequest) -> Result<()> {
        validate::check_id_limit("Community IDs", request.community_ids.as_deref())?;
        validate::check_id_limit("Game IDs", request.game_ids.as_deref())?;
        validate::check_id_limit("languages", request.languages.as_deref())?;
        validate::check_id_limit("User IDs", request.user_ids.as_deref())?;
        validate::check_id_limit("User login names", request.user_logins.as_deref())?;
        validate::check_page_size(request.page_size)
    }

    fn streams_query(path: &str, request: &StreamsRequest) -> Query {
        Query::new(path)
            .opt_param("after", request.after.as_deref())
            .opt_param("before", request.before.as_deref())
            .list_param("community_id", request.community_ids.as_deref())
            .param("first", request.page_size)
            .list_param("game_id", request.game_ids.as_deref())
            .list_param("language", request.languages.as_deref())
            .list_param("user_id", request.user_ids.as_deref())
            .list_param("user_login", request.user_logins.as_deref())
    }

    // ============================================================================
    // Games
    // ============================================================================

    /// Look up games by id and/or name
    pub async fn get_games(
        &self,
        game_ids: Option<&[String]>,
        names: Option<&[String]>,
    ) -> Result<Vec<Game>> {
        validate::check_id_limit("Game IDs", game_ids)?;
        validate::check_id_limit("Game names", names)?;

        let query = Query::new("games")
            .list_param("id", game_ids)
            .list_param("name", names);
        fetch_page(&self.http, &query).await
    }

    /// List games by current viewership
    pub fn get_top_games(
        &self,
        after: Option<&str>,
        before: Option<&str>,
        page_size: u32,
    ) -> Result<Cursor<Game>> {
        validate::check_page_size(page_size)?;

        let query = Query::new("games/top")
            .opt_param("after", after)
            .opt_param("before", before)
            .param("first", page_size);
        Ok(Cursor::new(self.http.clone(), query))
    }

    // ============================================================================
    // Clips
    // ============================================================================

    /// List clips for a broadcaster or game, or look clips up by id
    pub fn get_clips(&self, request: ClipsRequest) -> Result<Cursor<Clip>> {
        validate::require_one_of(&[
            ("broadcaster_id", request.broadcaster_id.is_some()),
            ("clip_ids", request.clip_ids.is_some()),
            ("game_id", request.game_id.is_some()),
        ])?;
        validate::check_id_limit("Clip IDs", request.clip_ids.as_deref())?;
        validate::check_page_size(request.page_size)?;

        let mut query = Query::new("clips")
            .opt_param("broadcaster_id", request.broadcaster_id.as_deref())
            .opt_param("game_id", request.game_id.as_deref())
            .list_param("id", request.clip_ids.as_deref())
            .opt_param("after", request.after.as_deref())
            .opt_param("before", request.before.as_deref())
            .opt_param("started_at", request.started_at.map(rfc3339))
            .opt_param("ended_at", request.ended_at.map(rfc3339));

        // Page size only applies to broadcaster/game listings; an id lookup
        // returns every requested clip in one response.
        if request.broadcaster_id.is_some() || request.game_id.is_some() {
            query = query.param("first", request.page_size);
        }
        Ok(Cursor::new(self.http.clone(), query))
    }

    // ============================================================================
    // Videos
    // ============================================================================

    /// List videos for a user or game, or look videos up by id
    pub fn get_videos(&self, request: VideosRequest) -> Result<Cursor<Video>> {
        validate::check_id_limit("Video IDs", request.video_ids.as_deref())?;

        let mut query = Query::new("videos")
            .list_param("id", request.video_ids.as_deref())
            .opt_param("user_id", request.user_id.as_deref())
            .opt_param("game_id", request.game_id.as_deref());

        if request.user_id.is_some() || request.game_id.is_some() {
            validate::check_page_size(request.page_size)?;
            validate::check_enum("period", &request.period, &PERIODS)?;
            validate::check_enum("sort", &request.sort, &VIDEO_SORTS)?;
            validate::check_enum("video_type", &request.video_type, &VIDEO_TYPES)?;

            query = query
                .opt_param("after", request.after.as_deref())
                .opt_param("before", request.before.as_deref())
                .param("first", request.page_size)
                .opt_param("language", request.language.as_deref())
                .param("period", &request.period)
                .param("sort", &request.sort)
                .param("type", &request.video_type);
        }
        Ok(Cursor::new(self.http.clone(), query))
    }

    // ============================================================================
    // Users
    // ============================================================================

    /// List follow relationships from and/or to a user.
    ///
    /// <https://dev.twitch.tv/docs/api/reference#get-users-follows>
    pub fn get_user_follows(
        &self,
        after: Option<&str>,
        page_size: u32,
        from_id: Option<&str>,
        to_id: Option<&str>,
    ) -> Result<Cursor<Follow>> {
        validate::require_one_of(&[("from_id", from_id.is_some()), ("to_id", to_id.is_some())])?;
        validate::check_page_size(page_size)?;

        let query = Query::new("users/follows")
            .opt_param("after", after)
            .param("first", page_size)
            .opt_param("from_id", from_id)
            .opt_param("to_id", to_id);
        Ok(Cursor::new(self.http.clone(), query))
    }

    /// Look up users by login name and/or id.
    ///
    /// <https://dev.twitch.tv/docs/api/reference#get-users>
    pub async fn get_users(
        &self,
        login_names: Option<&[String]>,
        ids: Option<&[String]>,
    ) -> Result<Vec<User>> {
        let count = login_names.map_or(0, <[String]>::len) + ids.map_or(0, <[String]>::len);
        if count > validate::MAX_COLLECTION_SIZE {
            return Err(Error::invalid_argument(
                "Sum of names and ids must not exceed 100!",
            ));
        }

        let query = Query::new("users")
            .list_param("login", login_names)
            .list_param("id", ids);
        fetch_page(&self.http, &query).await
    }

    // ============================================================================
    // Tags
    // ============================================================================

    /// List stream tags.
    ///
    /// <https://dev.twitch.tv/docs/api/reference#get-all-stream-tags>
    pub fn get_tags(
        &self,
        after: Option<&str>,
        page_size: u32,
        tag_ids: Option<&[String]>,
    ) -> Result<Cursor<Tag>> {
        validate::check_id_limit("Tag IDs", tag_ids)?;
        validate::check_page_size(page_size)?;

        let query = Query::new("tags/streams")
            .opt_param("after", after)
            .param("first", page_size)
            .list_param("tag_id", tag_ids);
        Ok(Cursor::new(self.http.clone(), query))
    }
}

fn rfc3339(instant: chrono::DateTime<chrono::Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Builder for [`HelixClient`]
pub struct HelixClientBuilder {
    credentials: Credentials,
    base_url: String,
    oauth_url: String,
    timeout: Duration,
}

impl HelixClientBuilder {
    /// Override the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the OAuth token endpoint base URL
    pub fn oauth_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> HelixClient {
        let http = HelixClient::build_http(&self.credentials, &self.base_url, self.timeout);
        HelixClient {
            http,
            credentials: self.credentials,
            base_url: self.base_url,
            oauth_url: self.oauth_url,
            timeout: self.timeout,
        }
    }
}
