use models::policy::{self, PolicyRecord};
use models::scaling_policy::ScalingPolicy;
use models::{DatabaseConnection, StoreError};
use tracing::debug;

use crate::logged;

/// Scaling policy documents, one per app (`policy_json`).
#[derive(Clone)]
pub struct PolicyStore {
    db: DatabaseConnection,
}

impl PolicyStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Replace the policy of `app_id` wholesale. There is no field-level merge.
    pub async fn upsert(&self, app_id: &str, policy: &ScalingPolicy, guid: &str) -> Result<(), StoreError> {
        debug!(app_id = %app_id, guid = %guid, "upsert policy");
        logged("policy.upsert", app_id, policy::upsert(&self.db, app_id, policy, guid).await)
    }

    pub async fn get(&self, app_id: &str) -> Result<PolicyRecord, StoreError> {
        logged("policy.get", app_id, policy::get(&self.db, app_id).await)
    }

    pub async fn retrieve_all(&self) -> Result<Vec<PolicyRecord>, StoreError> {
        logged("policy.retrieve_all", "*", policy::retrieve_all(&self.db).await)
    }

    pub async fn app_ids(&self) -> Result<Vec<String>, StoreError> {
        logged("policy.app_ids", "*", policy::app_ids(&self.db).await)
    }

    pub async fn delete(&self, app_id: &str) -> Result<bool, StoreError> {
        debug!(app_id = %app_id, "delete policy");
        logged("policy.delete", app_id, policy::delete(&self.db, app_id).await)
    }

    pub async fn exists(&self, app_id: &str) -> Result<bool, StoreError> {
        logged("policy.exists", app_id, policy::exists(&self.db, app_id).await)
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        logged("policy.count", "*", policy::count(&self.db).await)
    }

    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        logged("policy.delete_all", "*", policy::delete_all(&self.db).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn bounds(min: i32, max: i32) -> ScalingPolicy {
        ScalingPolicy { instance_min_count: min, instance_max_count: max, scaling_rules: Vec::new(), schedules: None }
    }

    #[tokio::test]
    async fn upsert_replaces_and_get_reports_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let store = PolicyStore::new(db);

        assert!(store.get("app").await.unwrap_err().is_not_found());

        store.upsert("app", &bounds(1, 5), "guid-1").await?;
        store.upsert("app", &bounds(2, 8), "guid-2").await?;
        let rec = store.get("app").await?;
        assert_eq!(rec.policy, bounds(2, 8));
        assert_eq!(rec.guid, "guid-2");
        assert_eq!(store.count().await?, 1);
        assert_eq!(store.app_ids().await?, vec!["app".to_string()]);

        assert!(store.delete("app").await?);
        assert!(!store.exists("app").await?);
        Ok(())
    }
}
