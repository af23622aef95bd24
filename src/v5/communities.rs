//! Community endpoints
//!
//! The full v5 community surface: lookups, the moderation and image
//! mutations, and the banned/timed-out user listings.

use super::TwitchClient;
use crate::error::Result;
use crate::query::Query;
use crate::resources::{decode_keyed_list, decode_record, Community, User};
use crate::validate;
use serde_json::{Map, Value};

/// Fields that may be changed on a community; `None` fields are omitted
/// from the request body entirely.
#[derive(Debug, Clone, Default)]
pub struct UpdateCommunityRequest {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub rules: Option<String>,
    pub email: Option<String>,
}

impl UpdateCommunityRequest {
    fn into_body(self) -> Value {
        let mut body = Map::new();
        if let Some(summary) = self.summary {
            body.insert("summary".to_string(), summary.into());
        }
        if let Some(description) = self.description {
            body.insert("description".to_string(), description.into());
        }
        if let Some(rules) = self.rules {
            body.insert("rules".to_string(), rules.into());
        }
        if let Some(email) = self.email {
            body.insert("email".to_string(), email.into());
        }
        Value::Object(body)
    }
}

/// Community operations, obtained from [`TwitchClient::communities`]
pub struct Communities<'a> {
    pub(super) client: &'a TwitchClient,
}

impl Communities<'_> {
    /// Look up a community by name
    pub async fn get_by_name(&self, community_name: &str) -> Result<Community> {
        let query = Query::new("communities").param("name", community_name);
        let body = self.client.request_get(&query).await?;
        decode_record(body)
    }

    /// Look up a community by id
    pub async fn get_by_id(&self, community_id: &str) -> Result<Community> {
        let query = Query::new(format!("communities/{community_id}"));
        let body = self.client.request_get(&query).await?;
        decode_record(body)
    }

    /// Update a community's editable fields
    pub async fn update(&self, community_id: &str, request: UpdateCommunityRequest) -> Result<()> {
        self.client
            .request_put(
                &format!("communities/{community_id}"),
                Some(request.into_body()),
            )
            .await
    }

    /// List the top communities by viewer count
    pub async fn get_top(&self, limit: u32, cursor: Option<&str>) -> Result<Vec<Community>> {
        validate::check_limit(limit)?;

        let query = Query::new("communities/top")
            .param("limit", limit)
            .opt_param("cursor", cursor);
        let body = self.client.request_get(&query).await?;
        decode_keyed_list(&body, "communities")
    }

    /// List users banned from a community. Requires a token.
    pub async fn get_banned_users(
        &self,
        community_id: &str,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<Vec<User>> {
        self.client.require_token()?;
        validate::check_limit(limit)?;

        let query = Query::new(format!("communities/{community_id}/bans"))
            .param("limit", limit)
            .opt_param("cursor", cursor);
        let body = self.client.request_get(&query).await?;
        decode_keyed_list(&body, "banned_users")
    }

    /// Ban a user from a community. Requires a token.
    pub async fn ban_user(&self, community_id: &str, user_id: &str) -> Result<()> {
        self.client.require_token()?;
        self.client
            .request_put(&format!("communities/{community_id}/bans/{user_id}"), None)
            .await
    }

    /// Lift a user's ban. Requires a token.
    pub async fn unban_user(&self, community_id: &str, user_id: &str) -> Result<()> {
        self.client.require_token()?;
        self.client
            .request_delete(&format!("communities/{community_id}/bans/{user_id}"))
            .await
    }

    /// Upload a community avatar image (base64-encoded). Requires a token.
    pub async fn create_avatar_image(&self, community_id: &str, avatar_image: &str) -> Result<()> {
        self.client.require_token()?;
        let body = serde_json::json!({ "avatar_image": avatar_image });
        self.client
            .request_post(
                &format!("communities/{community_id}/images/avatar"),
                Some(body),
            )
            .await
    }

    /// Remove the community avatar image. Requires a token.
    pub async fn delete_avatar_image(&self, community_id: &str) -> Result<()> {
        self.client.require_token()?;
        self.client
            .request_delete(&format!("communities/{community_id}/images/avatar"))
            .await
    }

    /// Upload a community cover image (base64-encoded). Requires a token.
    pub async fn create_cover_image(&self, community_id: &str, cover_image: &str) -> Result<()> {
        self.client.require_token()?;
        let body = serde_json::json!({ "cover_image": cover_image });
        self.client
            .request_post(
                &format!("communities/{community_id}/images/cover"),
                Some(body),
            )
            .await
    }

    /// Remove the community cover image. Requires a token.
    pub async fn delete_cover_image(&self, community_id: &str) -> Result<()> {
        self.client.require_token()?;
        self.client
            .request_delete(&format!("communities/{community_id}/images/cover"))
            .await
    }

    /// List a community's moderators
    pub async fn get_moderators(&self, community_id: &str) -> Result<Vec<User>> {
        let query = Query::new(format!("communities/{community_id}/moderators"));
        let body = self.client.request_get(&query).await?;
        decode_keyed_list(&body, "moderators")
    }

    /// Grant a user moderator rights. Requires a token.
    pub async fn add_moderator(&self, community_id: &str, user_id: &str) -> Result<()> {
        self.client.require_token()?;
        self.client
            .request_put(
                &format!("communities/{community_id}/moderators/{user_id}"),
                None,
            )
            .await
    }

    /// Revoke a user's moderator rights. Requires a token.
    pub async fn delete_moderator(&self, community_id: &str, user_id: &str) -> Result<()> {
        self.client.require_token()?;
        self.client
            .request_delete(&format!("communities/{community_id}/moderators/{user_id}"))
            .await
    }

    /// Report the caller's permissions in a community, raw as returned.
    /// Requires a token.
    pub async fn get_permissions(&self, community_id: &str) -> Result<Value> {
        self.client.require_token()?;
        let query = Query::new(format!("communities/{community_id}/permissions"));
        self.client.request_get(&query).await
    }

    /// Report a channel for violating community rules. Requires a token.
    pub async fn report_violation(&self, community_id: &str, channel_id: &str) -> Result<()> {
        self.client.require_token()?;
        let body = serde_json::json!({ "channel_id": channel_id });
        self.client
            .request_post(
                &format!("communities/{community_id}/report_channel"),
                Some(body),
            )
            .await
    }

    /// List users timed out from a community. Requires a token.
    pub async fn get_timed_out_users(
        &self,
        community_id: &str,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<Vec<User>> {
        self.client.require_token()?;
        validate::check_limit(limit)?;

        let query = Query::new(format!("communities/{community_id}/timeouts"))
            .param("limit", limit)
            .opt_param("cursor", cursor);
        let body = self.client.request_get(&query).await?;
        decode_keyed_list(&body, "timed_out_users")
    }

    /// Time a user out of a community. Requires a token.
    ///
    /// `duration` is in seconds.
    pub async fn add_timed_out_user(
        &self,
        community_id: &str,
        user_id: &str,
        duration: u64,
        reason: Option<&str>,
    ) -> Result<()> {
        self.client.require_token()?;

        let mut body = Map::new();
        body.insert("duration".to_string(), duration.into());
        if let Some(reason) = reason {
            body.insert("reason".to_string(), reason.into());
        }
        self.client
            .request_put(
                &format!("communities/{community_id}/timeouts/{user_id}"),
                Some(Value::Object(body)),
            )
            .await
    }

    /// Lift a user's timeout. Requires a token.
    pub async fn delete_timed_out_user(&self, community_id: &str, user_id: &str) -> Result<()> {
        self.client.require_token()?;
        self.client
            .request_delete(&format!("communities/{community_id}/timeouts/{user_id}"))
            .await
    }
}
