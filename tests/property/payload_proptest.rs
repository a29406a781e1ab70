//! Property-based tests for feature payload validation

use proptest::prelude::*;
use serde_json::json;
use upvote_backend::shared::payload::TITLE_MAX_CHARS;
use upvote_backend::shared::{FeatureChanges, NewFeature, SharedError, UpdateMode};

proptest! {
    #[test]
    fn test_valid_fields_are_trimmed_and_accepted(
        title in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,150}",
        description in "[a-zA-Z0-9][ -~]{0,500}",
        padding in " {0,5}",
    ) {
        let body = json!({
            "title": format!("{padding}{title}{padding}"),
            "description": description,
        });

        let feature = NewFeature::from_json(body.to_string().as_bytes()).unwrap();

        prop_assert_eq!(feature.title, title.trim());
        prop_assert_eq!(feature.description, description.trim());
    }

    #[test]
    fn test_long_titles_are_rejected(extra in 1usize..50) {
        let body = json!({ "title": "t".repeat(TITLE_MAX_CHARS + extra), "description": "d" });

        match NewFeature::from_json(body.to_string().as_bytes()) {
            Err(SharedError::ValidationError(errors)) => {
                prop_assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["title"]);
            }
            other => prop_assert!(false, "expected a title error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_values_are_rejected(blank in "[ \t\n]{0,10}") {
        let body = json!({ "title": blank, "description": blank });

        match FeatureChanges::from_json(body.to_string().as_bytes(), UpdateMode::Partial) {
            Err(SharedError::ValidationError(errors)) => {
                prop_assert_eq!(errors.fields().count(), 2);
            }
            other => prop_assert!(false, "expected blank errors, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_update_never_invents_fields(description in "[a-z]{1,30}") {
        let body = json!({ "description": description });

        let changes =
            FeatureChanges::from_json(body.to_string().as_bytes(), UpdateMode::Partial).unwrap();

        prop_assert!(changes.title.is_none());
        prop_assert_eq!(changes.description, Some(description));
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(body in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = FeatureChanges::from_json(&body, UpdateMode::Full);
    }
}
