use models::range::TimeRange;
use models::scaling_history::{self, ScalingHistoryRecord};
use models::{DatabaseConnection, Order, StoreError};
use tracing::debug;

use crate::logged;

/// Append-only record of scaling decisions (`scalinghistory`).
#[derive(Clone)]
pub struct ScalingHistoryStore {
    db: DatabaseConnection,
}

impl ScalingHistoryStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn append(&self, record: &ScalingHistoryRecord) -> Result<(), StoreError> {
        debug!(
            app_id = %record.app_id,
            timestamp = record.timestamp,
            scaling_type = %record.scaling_type,
            status = %record.status,
            "append scaling history"
        );
        logged("history.append", &record.app_id, scaling_history::append(&self.db, record).await)
    }

    /// Timeline of `app_id` within `range`, oldest first.
    pub async fn query(&self, app_id: &str, range: TimeRange) -> Result<Vec<ScalingHistoryRecord>, StoreError> {
        self.retrieve(app_id, range, Order::Asc).await
    }

    pub async fn retrieve(&self, app_id: &str, range: TimeRange, order: Order) -> Result<Vec<ScalingHistoryRecord>, StoreError> {
        logged("history.retrieve", app_id, scaling_history::retrieve(&self.db, app_id, range, order).await)
    }

    pub async fn exists(&self, app_id: &str, timestamp: i64) -> Result<bool, StoreError> {
        logged("history.exists", app_id, scaling_history::exists(&self.db, app_id, timestamp).await)
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        logged("history.count", "*", scaling_history::count(&self.db).await)
    }

    pub async fn prune(&self, before: i64) -> Result<u64, StoreError> {
        let n = logged("history.prune", "*", scaling_history::prune(&self.db, before).await)?;
        debug!(before, removed = n, "pruned scaling history");
        Ok(n)
    }

    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        logged("history.delete_all", "*", scaling_history::delete_all(&self.db).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::enums::{ScalingStatus, ScalingType};

    #[tokio::test]
    async fn query_orders_out_of_order_appends() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let store = ScalingHistoryStore::new(db);

        for ts in [100, 300, 200] {
            store
                .append(&ScalingHistoryRecord {
                    app_id: "app".to_string(),
                    timestamp: ts,
                    scaling_type: ScalingType::Dynamic,
                    status: ScalingStatus::Ignored,
                    old_instances: 3,
                    new_instances: 3,
                    reason: "app in cooldown".to_string(),
                    message: String::new(),
                    error: None,
                })
                .await?;
        }
        let ts: Vec<i64> = store.query("app", TimeRange::all()).await?.iter().map(|r| r.timestamp).collect();
        assert_eq!(ts, vec![100, 200, 300]);
        assert!(store.exists("app", 200).await?);

        store.delete_all().await?;
        assert_eq!(store.count().await?, 0);
        assert!(!store.exists("app", 200).await?);
        Ok(())
    }
}
