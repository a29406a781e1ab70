//! Feature storage tests

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use upvote_backend::backend::features::db;
    use upvote_backend::backend::voting::db as vote_db;
    use upvote_backend::shared::FeatureChanges;

    use crate::common::{create_test_pool, stored_vote_rows};

    #[tokio::test]
    async fn test_create_and_get_feature() {
        let pool = create_test_pool().await;

        let created = db::create_feature(&pool, "Dark mode", "Add a dark theme")
            .await
            .unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let fetched = db::get_feature(&pool, created.id).await.unwrap();
        assert_eq!(fetched, Some(created));

        assert_eq!(db::get_feature(&pool, 4040).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_counts_votes_per_feature() {
        let pool = create_test_pool().await;
        let quiet = db::create_feature(&pool, "Quiet", "d").await.unwrap();
        let loud = db::create_feature(&pool, "Loud", "d").await.unwrap();

        for voter in ["a", "b", "c"] {
            vote_db::insert_vote(&pool, loud.id, voter).await.unwrap();
        }

        let listed = db::list_features(&pool).await.unwrap();
        let counts: Vec<(i64, i64)> = listed
            .iter()
            .map(|row| (row.feature.id, row.vote_count))
            .collect();
        assert_eq!(counts, vec![(loud.id, 3), (quiet.id, 0)]);
    }

    #[tokio::test]
    async fn test_update_keeps_unsupplied_fields() {
        let pool = create_test_pool().await;
        let created = db::create_feature(&pool, "Export", "CSV").await.unwrap();

        let changes = FeatureChanges {
            title: None,
            description: Some("CSV and PDF".to_string()),
        };
        let updated = db::update_feature(&pool, created.id, &changes)
            .await
            .unwrap()
            .expect("feature exists");

        assert_eq!(updated.title, "Export");
        assert_eq!(updated.description, "CSV and PDF");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let missing = db::update_feature(&pool, 4040, &changes).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_delete_feature_cascades() {
        let pool = create_test_pool().await;
        let feature = db::create_feature(&pool, "Doomed", "d").await.unwrap();
        let survivor = db::create_feature(&pool, "Survivor", "d").await.unwrap();

        vote_db::insert_vote(&pool, feature.id, "1.2.3.4").await.unwrap();
        vote_db::insert_vote(&pool, survivor.id, "1.2.3.4").await.unwrap();

        assert!(db::delete_feature(&pool, feature.id).await.unwrap());
        assert!(!db::delete_feature(&pool, feature.id).await.unwrap());

        assert_eq!(stored_vote_rows(&pool, feature.id).await, 0);
        assert_eq!(stored_vote_rows(&pool, survivor.id).await, 1);
    }
}
