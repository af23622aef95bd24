//! Tests for the v5 endpoint methods

use super::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TwitchClient {
    TwitchClient::builder(Credentials::new("client-id"))
        .base_url(server.uri())
        .build()
}

fn authed_client_for(server: &MockServer) -> TwitchClient {
    TwitchClient::builder(Credentials::new("client-id").with_token("user-token"))
        .base_url(server.uri())
        .build()
}

// ============================================================================
// Headers and token gating
// ============================================================================

#[tokio::test]
async fn test_v5_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/staff"))
        .and(header("Accept", "application/vnd.twitchtv.v5+json"))
        .and(header("Client-ID", "client-id"))
        .and(header("Authorization", "OAuth user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": 10, "name": "staff"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    let team = client.teams().get("staff").await.unwrap();
    assert_eq!(team.name.as_deref(), Some("staff"));
}

#[tokio::test]
async fn test_gated_operation_without_token_issues_no_request() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .communities()
        .ban_user("e9f17055", "44322889")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Authentication failed: OAuth token required");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ungated_reads_need_no_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/communities/e9f17055/moderators"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "moderators": [{"id": "44322889", "login": "dallas"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let moderators = client.communities().get_moderators("e9f17055").await.unwrap();
    assert_eq!(moderators.len(), 1);
}

// ============================================================================
// Communities
// ============================================================================

#[tokio::test]
async fn test_get_community_by_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/communities"))
        .and(query_param("name", "DallasTesterCommunity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "e9f17055-810f-4744-ba3d-10d5bed88e1b",
            "name": "DallasTesterCommunity"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let community = client
        .communities()
        .get_by_name("DallasTesterCommunity")
        .await
        .unwrap();

    assert_eq!(
        community.id.as_deref(),
        Some("e9f17055-810f-4744-ba3d-10d5bed88e1b")
    );
}

#[tokio::test]
async fn test_update_community_omits_absent_fields() {
    let server = MockServer::start().await;

    // Only the summary appears in the body; the other fields are omitted,
    // not serialized as null.
    Mock::given(method("PUT"))
        .and(path("/communities/e9f17055"))
        .and(body_json(json!({"summary": "Lots of polar bears"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .communities()
        .update(
            "e9f17055",
            UpdateCommunityRequest {
                summary: Some("Lots of polar bears".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_top_communities_validates_limit() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client.communities().get_top(101, None).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Maximum number of objects returned in one request is 100"
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_top_communities_passes_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/communities/top"))
        .and(query_param("limit", "10"))
        .and(query_param("cursor", "MTA="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_total": 100,
            "_cursor": "MjA=",
            "communities": [{"_id": "abc", "name": "speedrunning"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let communities = client
        .communities()
        .get_top(10, Some("MTA="))
        .await
        .unwrap();
    assert_eq!(communities[0].name.as_deref(), Some("speedrunning"));
}

#[tokio::test]
async fn test_banned_users_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/communities/e9f17055/bans"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "banned_users": [{"id": "44322889", "login": "dallas"}]
        })))
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    let banned = client
        .communities()
        .get_banned_users("e9f17055", 10, None)
        .await
        .unwrap();
    assert_eq!(banned[0].login.as_deref(), Some("dallas"));
}

#[tokio::test]
async fn test_timeout_body_includes_duration_and_reason() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/communities/e9f17055/timeouts/44322889"))
        .and(body_json(json!({"duration": 600, "reason": "spam"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    client
        .communities()
        .add_timed_out_user("e9f17055", "44322889", 600, Some("spam"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_mutations_hit_expected_paths() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/communities/e9f17055/images/avatar"))
        .and(body_json(json!({"avatar_image": "ZGF0YQ=="})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/communities/e9f17055/moderators/44322889"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed_client_for(&server);
    let communities = client.communities();
    communities
        .create_avatar_image("e9f17055", "ZGF0YQ==")
        .await
        .unwrap();
    communities
        .delete_moderator("e9f17055", "44322889")
        .await
        .unwrap();
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_channels_null_result_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/channels"))
        .and(query_param("query", "starcraft"))
        .and(query_param("limit", "25"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "channels": null
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let channels = client.search().channels("starcraft", 25, 0).await.unwrap();
    assert!(channels.is_empty());
}

#[tokio::test]
async fn test_search_games_sends_live_flag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/games"))
        .and(query_param("query", "star"))
        .and(query_param("live", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "games": [{"_id": 490422, "name": "StarCraft II"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let games = client.search().games("star", true).await.unwrap();
    assert_eq!(games[0].name.as_deref(), Some("StarCraft II"));
}

#[tokio::test]
async fn test_search_streams_limit_bound() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client.search().streams("star", 101, 0, None).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Maximum number of objects returned in one request is 100"
    );
}

// ============================================================================
// Teams
// ============================================================================

#[tokio::test]
async fn test_get_all_teams() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": [{"_id": 10, "name": "staff", "display_name": "Twitch Staff"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let teams = client.teams().get_all(10, 0).await.unwrap();
    assert_eq!(teams[0].display_name.as_deref(), Some("Twitch Staff"));
}
