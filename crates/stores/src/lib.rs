//! Store handles the autoscaler's components share.
//! - One handle per table family, all backed by the same pool.
//! - Active schedules sit behind a trait so the legacy and current tables are interchangeable.
//! - `Stores` is opened by the composing process and closed on shutdown.

pub mod metrics;
pub mod policy_store;
pub mod cooldown_store;
pub mod history_store;
pub mod active_schedule;
#[cfg(test)]
pub mod test_support;

use std::sync::Arc;

use configs::{AppConfig, ScheduleSchema};
use models::{db, DatabaseConnection, StoreError};
use tracing::{info, warn};

pub use active_schedule::repo::legacy::LegacyActiveScheduleStore;
pub use active_schedule::repo::scheduler::SchedulerActiveScheduleStore;
pub use active_schedule::ActiveScheduleStore;
pub use cooldown_store::CooldownStore;
pub use history_store::ScalingHistoryStore;
pub use metrics::{AppMetricStore, InstanceMetricStore};
pub use policy_store::PolicyStore;

/// Every store over one shared pool.
#[derive(Clone)]
pub struct Stores {
    db: DatabaseConnection,
    pub instance_metrics: InstanceMetricStore,
    pub app_metrics: AppMetricStore,
    pub policies: PolicyStore,
    pub cooldowns: CooldownStore,
    pub history: ScalingHistoryStore,
    pub active_schedules: Arc<dyn ActiveScheduleStore>,
}

impl Stores {
    /// Connect using `config.database` and pick the active-schedule adapter from
    /// `config.schedule.schema`.
    pub async fn open(config: &AppConfig) -> Result<Self, StoreError> {
        let db = db::connect_with_config(&config.database).await?;
        Ok(Self::from_connection(db, config.schedule.schema))
    }

    pub fn from_connection(db: DatabaseConnection, schema: ScheduleSchema) -> Self {
        let active_schedules: Arc<dyn ActiveScheduleStore> = match schema {
            ScheduleSchema::Legacy => Arc::new(LegacyActiveScheduleStore::new(db.clone())),
            ScheduleSchema::Current => Arc::new(SchedulerActiveScheduleStore::new(db.clone())),
        };
        info!(schema = ?schema, "stores ready");
        Self {
            instance_metrics: InstanceMetricStore::new(db.clone()),
            app_metrics: AppMetricStore::new(db.clone()),
            policies: PolicyStore::new(db.clone()),
            cooldowns: CooldownStore::new(db.clone()),
            history: ScalingHistoryStore::new(db.clone()),
            active_schedules,
            db,
        }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        logged("db.ping", "*", db::ping(&self.db).await)
    }

    /// Close the pool. Handles cloned out of this value stop working afterwards.
    pub async fn close(self) -> Result<(), StoreError> {
        self.db.close().await.map_err(|e| {
            warn!(error = %e, "closing database pool failed");
            StoreError::ConnectionFailure(e.to_string())
        })?;
        info!("stores closed");
        Ok(())
    }
}

/// Log a failed store call at `warn!` and hand the result back unchanged.
pub(crate) fn logged<T>(op: &'static str, app_id: &str, res: Result<T, StoreError>) -> Result<T, StoreError> {
    if let Err(e) = &res {
        if e.is_not_found() {
            return res;
        }
        warn!(op, app_id = %app_id, error = %e, "store operation failed");
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::enums::{ScalingStatus, ScalingType};
    use models::scaling_history::ScalingHistoryRecord;
    use models::range::TimeRange;
    use models::schedule::ScheduleDescriptor;

    fn history(app_id: &str, timestamp: i64) -> ScalingHistoryRecord {
        ScalingHistoryRecord {
            app_id: app_id.to_string(),
            timestamp,
            scaling_type: ScalingType::Schedule,
            status: ScalingStatus::Succeeded,
            old_instances: 1,
            new_instances: 3,
            reason: "schedule started".to_string(),
            message: String::new(),
            error: None,
        }
    }

    #[tokio::test]
    async fn schema_selects_adapter_table() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let legacy = Stores::from_connection(db.clone(), ScheduleSchema::Legacy);
        let current = Stores::from_connection(db, ScheduleSchema::Current);

        legacy.active_schedules.activate("app", &ScheduleDescriptor::new(7, 1, 1, 5)).await?;
        assert!(legacy.active_schedules.exists("app").await?);
        // the current adapter reads a different table
        assert!(!current.active_schedules.exists("app").await?);
        assert_eq!(models::active_schedule::count(current.connection()).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_appends_for_different_apps() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let stores = Stores::from_connection(db, ScheduleSchema::Current);

        let mut handles = Vec::new();
        for app in ["app-a", "app-b", "app-c", "app-d"] {
            let history_store = stores.history.clone();
            handles.push(tokio::spawn(async move {
                for ts in 0..10 {
                    history_store.append(&history(app, ts)).await?;
                }
                Ok::<_, StoreError>(())
            }));
        }
        for h in handles {
            h.await??;
        }

        assert_eq!(stores.history.count().await?, 40);
        let rows = stores.history.query("app-c", TimeRange::all()).await?;
        assert_eq!(rows.len(), 10);
        assert!(rows.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        Ok(())
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[tokio::test]
    async fn maintenance_failures_are_logged() -> Result<(), anyhow::Error> {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let db = get_db().await?;
        let stores = Stores::from_connection(db.clone(), ScheduleSchema::Current);
        db.close().await?;

        assert!(matches!(stores.history.count().await, Err(StoreError::ConnectionFailure(_))));
        assert!(stores.instance_metrics.prune(100).await.is_err());
        assert!(stores.policies.exists("app").await.is_err());
        assert!(stores.active_schedules.delete_all().await.is_err());

        let text = logs.text();
        for op in ["history.count", "instance_metric.prune", "policy.exists", "active_schedule.delete_all"] {
            assert!(text.contains(op), "missing warn for {op}: {text}");
        }
        assert!(text.contains("app"));
        Ok(())
    }

    #[tokio::test]
    async fn open_and_close() -> Result<(), anyhow::Error> {
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite::memory:".into();
        cfg.database.max_connections = 1;
        cfg.database.min_connections = 1;
        cfg.schedule.schema = ScheduleSchema::Legacy;

        let stores = Stores::open(&cfg).await?;
        stores.ping().await?;
        stores.close().await?;
        Ok(())
    }

    #[tokio::test]
    async fn open_reports_connection_failure() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite:///nonexistent-dir/definitely/missing.db".into();
        cfg.database.max_connections = 1;
        cfg.database.min_connections = 1;
        cfg.database.connect_timeout_secs = 1;
        cfg.database.acquire_timeout_secs = 1;

        let err = Stores::open(&cfg).await.err().expect("open must fail");
        assert!(matches!(err, StoreError::ConnectionFailure(_)));
    }
}
