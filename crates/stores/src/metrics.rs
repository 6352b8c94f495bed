use models::range::TimeRange;
use models::{app_metric, instance_metric, DatabaseConnection, Order, StoreError};
use tracing::debug;

use crate::logged;

/// Raw per-instance samples (`appinstancemetrics`).
#[derive(Clone)]
pub struct InstanceMetricStore {
    db: DatabaseConnection,
}

impl InstanceMetricStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn insert(&self, sample: &instance_metric::Model) -> Result<(), StoreError> {
        debug!(app_id = %sample.app_id, instance_index = sample.instance_index, name = %sample.name, timestamp = sample.timestamp, "insert instance metric");
        logged("instance_metric.insert", &sample.app_id, instance_metric::insert(&self.db, sample).await)
    }

    pub async fn exists(&self, app_id: &str, instance_index: i32, name: &str, timestamp: i64) -> Result<bool, StoreError> {
        logged("instance_metric.exists", app_id, instance_metric::exists(&self.db, app_id, instance_index, name, timestamp).await)
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        logged("instance_metric.count", "*", instance_metric::count(&self.db).await)
    }

    pub async fn retrieve(
        &self,
        app_id: &str,
        instance_index: Option<i32>,
        name: &str,
        range: TimeRange,
        order: Order,
    ) -> Result<Vec<instance_metric::Model>, StoreError> {
        logged(
            "instance_metric.retrieve",
            app_id,
            instance_metric::retrieve(&self.db, app_id, instance_index, name, range, order).await,
        )
    }

    pub async fn prune(&self, before: i64) -> Result<u64, StoreError> {
        let n = logged("instance_metric.prune", "*", instance_metric::prune(&self.db, before).await)?;
        debug!(before, removed = n, "pruned instance metrics");
        Ok(n)
    }

    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        logged("instance_metric.delete_all", "*", instance_metric::delete_all(&self.db).await)
    }
}

/// Aggregated and custom per-app samples (`app_metric`).
#[derive(Clone)]
pub struct AppMetricStore {
    db: DatabaseConnection,
}

impl AppMetricStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    pub async fn insert(&self, sample: &app_metric::Model) -> Result<(), StoreError> {
        debug!(app_id = %sample.app_id, metric_type = %sample.metric_type, timestamp = sample.timestamp, "insert app metric");
        logged("app_metric.insert", &sample.app_id, app_metric::insert(&self.db, sample).await)
    }

    pub async fn exists(&self, app_id: &str, metric_type: &str, timestamp: i64) -> Result<bool, StoreError> {
        logged("app_metric.exists", app_id, app_metric::exists(&self.db, app_id, metric_type, timestamp).await)
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        logged("app_metric.count", "*", app_metric::count(&self.db).await)
    }

    pub async fn retrieve(&self, app_id: &str, metric_type: &str, range: TimeRange, order: Order) -> Result<Vec<app_metric::Model>, StoreError> {
        logged("app_metric.retrieve", app_id, app_metric::retrieve(&self.db, app_id, metric_type, range, order).await)
    }

    pub async fn prune(&self, before: i64) -> Result<u64, StoreError> {
        let n = logged("app_metric.prune", "*", app_metric::prune(&self.db, before).await)?;
        debug!(before, removed = n, "pruned app metrics");
        Ok(n)
    }

    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        logged("app_metric.delete_all", "*", app_metric::delete_all(&self.db).await)
    }
}
