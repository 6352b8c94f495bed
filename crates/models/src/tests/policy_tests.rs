use anyhow::Result;
use sea_orm::{EntityTrait, Set};

use super::setup_test_db;
use crate::errors::StoreError;
use crate::policy;
use crate::scaling_policy::{ScalingPolicy, ScalingRule};

fn policy_with_bounds(min: i32, max: i32) -> ScalingPolicy {
    ScalingPolicy {
        instance_min_count: min,
        instance_max_count: max,
        scaling_rules: vec![ScalingRule {
            metric_type: "memoryused".into(),
            breach_duration_secs: 300,
            threshold: 30,
            operator: "<".into(),
            cool_down_secs: 300,
            adjustment: "-1".into(),
        }],
        schedules: None,
    }
}

#[tokio::test]
async fn test_upsert_then_get_returns_document_and_guid() -> Result<()> {
    let db = setup_test_db().await?;

    let p = policy_with_bounds(1, 5);
    policy::upsert(&db, "app-1", &p, "1234").await?;

    let got = policy::get(&db, "app-1").await?;
    assert_eq!(got.policy, p);
    assert_eq!(got.guid, "1234");
    assert!(policy::exists(&db, "app-1").await?);
    Ok(())
}

#[tokio::test]
async fn test_upsert_replaces_whole_document() -> Result<()> {
    let db = setup_test_db().await?;

    policy::upsert(&db, "app-1", &policy_with_bounds(1, 5), "guid-a").await?;
    let replacement = ScalingPolicy { scaling_rules: vec![], ..policy_with_bounds(2, 8) };
    policy::upsert(&db, "app-1", &replacement, "guid-b").await?;

    let got = policy::get(&db, "app-1").await?;
    assert_eq!(got.policy, replacement);
    assert!(got.policy.scaling_rules.is_empty());
    assert_eq!(got.guid, "guid-b");
    assert_eq!(policy::count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_get_missing_policy_is_not_found() -> Result<()> {
    let db = setup_test_db().await?;
    let err = policy::get(&db, "nope").await.unwrap_err();
    assert!(err.is_not_found());
    Ok(())
}

#[tokio::test]
async fn test_malformed_stored_document_is_serialization_failure() -> Result<()> {
    let db = setup_test_db().await?;

    let am = policy::ActiveModel {
        app_id: Set("broken".to_string()),
        policy_json: Set("{\"instance_min_count\":".to_string()),
        guid: Set("g".to_string()),
    };
    policy::Entity::insert(am).exec_without_returning(&db).await?;

    let err = policy::get(&db, "broken").await.unwrap_err();
    assert!(matches!(err, StoreError::SerializationFailure(_)), "unexpected error: {err}");
    Ok(())
}

#[tokio::test]
async fn test_app_ids_retrieve_all_and_delete() -> Result<()> {
    let db = setup_test_db().await?;

    policy::upsert(&db, "app-b", &policy_with_bounds(1, 2), "g1").await?;
    policy::upsert(&db, "app-a", &policy_with_bounds(1, 3), "g2").await?;

    assert_eq!(policy::app_ids(&db).await?, vec!["app-a".to_string(), "app-b".to_string()]);
    let all = policy::retrieve_all(&db).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].app_id, "app-a");
    assert_eq!(all[0].policy.instance_max_count, 3);

    assert!(policy::delete(&db, "app-a").await?);
    assert!(!policy::delete(&db, "app-a").await?);
    assert!(!policy::exists(&db, "app-a").await?);

    policy::delete_all(&db).await?;
    assert_eq!(policy::count(&db).await?, 0);
    assert!(policy::app_ids(&db).await?.is_empty());
    Ok(())
}
