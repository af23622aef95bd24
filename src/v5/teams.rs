//! Team endpoints

use super::TwitchClient;
use crate::error::Result;
use crate::query::Query;
use crate::resources::{decode_keyed_list, decode_record, Team};
use crate::validate;

/// Team operations, obtained from [`TwitchClient::teams`]
pub struct Teams<'a> {
    pub(super) client: &'a TwitchClient,
}

impl Teams<'_> {
    /// Look up a team by name
    pub async fn get(&self, team_name: &str) -> Result<Team> {
        let query = Query::new(format!("teams/{team_name}"));
        let body = self.client.request_get(&query).await?;
        decode_record(body)
    }

    /// List all active teams
    pub async fn get_all(&self, limit: u32, offset: u32) -> Result<Vec<Team>> {
        validate::check_limit(limit)?;

        let query = Query::new("teams")
            .param("limit", limit)
            .param("offset", offset);
        let body = self.client.request_get(&query).await?;
        decode_keyed_list(&body, "teams")
    }
}
