//! Voting API integration tests
//!
//! Tests for upvote and remove-vote, including how the voter identifier is
//! derived from request metadata.

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{
        body::{to_bytes, Body},
        extract::ConnectInfo,
        http::{Method, Request, StatusCode},
    };
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;
    use upvote_backend::backend::{create_router, AppState};

    use crate::common::{assert_error, create_test_app, create_test_pool, vote_count};

    #[tokio::test]
    async fn test_voting_scenario() {
        let app = create_test_app().await;

        let created = app.create_feature("Dark mode", "Add a dark theme").await;
        assert_eq!(vote_count(&created), 0);
        let id = created["id"].as_i64().expect("id");

        let response = app.upvote(id, "1.2.3.4").await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["message"], "Vote added successfully");
        assert_eq!(vote_count(&body), 1);
        assert_eq!(body["feature"]["user_has_voted"], true);

        let response = app.upvote(id, "1.2.3.4").await;
        assert_error(
            &response,
            StatusCode::BAD_REQUEST,
            "You have already voted for this feature",
        );
        let body: Value = app.get_feature_as(id, "1.2.3.4").await.json();
        assert_eq!(vote_count(&body), 1);

        let response = app.upvote(id, "5.6.7.8").await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        assert_eq!(vote_count(&response.json::<Value>()), 2);

        let response = app.remove_vote(id, "1.2.3.4").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["message"], "Vote removed successfully");
        assert_eq!(vote_count(&body), 1);
        assert_eq!(body["feature"]["user_has_voted"], false);

        let stats: Value = app.stats(id).await.json();
        assert_eq!(stats["total_votes"], 1);
        let recent = stats["recent_votes"].as_array().expect("recent votes");
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0]["user_identifier"], "5.6.7.8...");
    }

    #[tokio::test]
    async fn test_upvote_missing_feature() {
        let app = create_test_app().await;

        let response = app.upvote(777, "1.2.3.4").await;
        assert_error(&response, StatusCode::NOT_FOUND, "Feature not found");

        let response = app.server.post("/api/features/seven/upvote/").await;
        assert_error(&response, StatusCode::NOT_FOUND, "Feature not found");
    }

    #[tokio::test]
    async fn test_remove_vote_without_vote() {
        let app = create_test_app().await;
        let id = app.create_feature_id("Tags").await;

        let response = app.remove_vote(id, "1.2.3.4").await;
        assert_error(
            &response,
            StatusCode::BAD_REQUEST,
            "You have not voted for this feature",
        );

        let response = app.remove_vote(555, "1.2.3.4").await;
        assert_error(&response, StatusCode::NOT_FOUND, "Feature not found");
    }

    #[tokio::test]
    async fn test_upvote_then_remove_restores_count() {
        let app = create_test_app().await;
        let id = app.create_feature_id("Tags").await;
        app.upvote(id, "9.9.9.9").await;

        let before = vote_count(&app.get_feature_as(id, "x").await.json::<Value>());

        app.upvote(id, "8.8.8.8").await;
        app.remove_vote(id, "8.8.8.8").await;

        let after = vote_count(&app.get_feature_as(id, "x").await.json::<Value>());
        assert_eq!(before, after);

        // The same identifier may vote again once its vote is gone
        let response = app.upvote(id, "8.8.8.8").await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_forwarded_for_uses_first_entry() {
        let app = create_test_app().await;
        let id = app.create_feature_id("Proxies").await;

        let response = app.upvote(id, "203.0.113.9, 10.0.0.1").await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        // Same client behind a different proxy chain
        let response = app.upvote(id, "203.0.113.9").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let stats: Value = app.stats(id).await.json();
        assert_eq!(stats["recent_votes"][0]["user_identifier"], "203.0.113....");
    }

    #[tokio::test]
    async fn test_without_metadata_identifier_is_unknown() {
        let app = create_test_app().await;
        let id = app.create_feature_id("Anonymous").await;

        let response = app.server.post(&format!("/api/features/{id}/upvote/")).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        // Every request without metadata shares the one identifier
        let response = app.server.post(&format!("/api/features/{id}/upvote/")).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let stats: Value = app.stats(id).await.json();
        assert_eq!(stats["recent_votes"][0]["user_identifier"], "unknown...");
    }

    #[tokio::test]
    async fn test_peer_address_identifies_voter() {
        let pool = create_test_pool().await;
        let app = create_router(AppState::new(pool.clone()));
        let peer: SocketAddr = "192.0.2.10:40000".parse().unwrap();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/features/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"title":"Peers","description":"By address"}"#))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/features/1/upvote/")
            .extension(ConnectInfo(peer))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let request = Request::builder()
            .uri("/api/features/1/stats/")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let stats: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(stats["recent_votes"][0]["user_identifier"], "192.0.2.10...");
    }
}
