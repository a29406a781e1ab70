//! Stats API integration tests

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use crate::common::{assert_error, create_test_app};

    #[tokio::test]
    async fn test_stats_lists_ten_most_recent_votes() {
        let app = create_test_app().await;
        let id = app.create_feature_id("Popular").await;

        for n in 1..=12 {
            let response = app.upvote(id, &format!("voter-{n:02}")).await;
            assert_eq!(response.status_code(), StatusCode::CREATED);
        }

        let response = app.stats(id).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let stats: Value = response.json();

        assert_eq!(stats["feature_id"], id);
        assert_eq!(stats["title"], "Popular");
        assert_eq!(stats["total_votes"], 12);

        let identifiers: Vec<&str> = stats["recent_votes"]
            .as_array()
            .expect("recent votes")
            .iter()
            .filter_map(|vote| vote["user_identifier"].as_str())
            .collect();
        let expected: Vec<String> = (3..=12).rev().map(|n| format!("voter-{n:02}...")).collect();
        assert_eq!(identifiers, expected);
    }

    #[tokio::test]
    async fn test_stats_redacts_long_identifiers() {
        let app = create_test_app().await;
        let id = app.create_feature_id("IPv6").await;

        app.upvote(id, "2001:0db8:85a3::8a2e:0370:7334").await;

        let stats: Value = app.stats(id).await.json();
        assert_eq!(stats["recent_votes"][0]["user_identifier"], "2001:0db8:...");
        assert!(stats["recent_votes"][0]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_stats_without_votes() {
        let app = create_test_app().await;
        let id = app.create_feature_id("Quiet").await;

        let stats: Value = app.stats(id).await.json();
        assert_eq!(stats["total_votes"], 0);
        assert_eq!(stats["recent_votes"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_stats_not_found() {
        let app = create_test_app().await;

        let response = app.stats(31337).await;
        assert_error(&response, StatusCode::NOT_FOUND, "Feature not found");
    }
}
