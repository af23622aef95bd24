//! Search endpoints
//!
//! The search envelopes return `null` rather than `[]` when nothing
//! matches; decoding treats both as empty.

use super::TwitchClient;
use crate::error::Result;
use crate::query::Query;
use crate::resources::{decode_keyed_list, Channel, Game, Stream};
use crate::validate;

/// Search operations, obtained from [`TwitchClient::search`]
pub struct Search<'a> {
    pub(super) client: &'a TwitchClient,
}

impl Search<'_> {
    /// Search channels by name or description
    pub async fn channels(&self, query: &str, limit: u32, offset: u32) -> Result<Vec<Channel>> {
        validate::check_limit(limit)?;

        let query = Query::new("search/channels")
            .param("query", query)
            .param("limit", limit)
            .param("offset", offset);
        let body = self.client.request_get(&query).await?;
        decode_keyed_list(&body, "channels")
    }

    /// Search games by name; `live` restricts to games being streamed now
    pub async fn games(&self, query: &str, live: bool) -> Result<Vec<Game>> {
        let query = Query::new("search/games")
            .param("query", query)
            .param("live", live);
        let body = self.client.request_get(&query).await?;
        decode_keyed_list(&body, "games")
    }

    /// Search live streams by title and description
    pub async fn streams(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
        hls: Option<bool>,
    ) -> Result<Vec<Stream>> {
        validate::check_limit(limit)?;

        let query = Query::new("search/streams")
            .param("query", query)
            .param("limit", limit)
            .param("offset", offset)
            .opt_param("hls", hls);
        let body = self.client.request_get(&query).await?;
        decode_keyed_list(&body, "streams")
    }
}
