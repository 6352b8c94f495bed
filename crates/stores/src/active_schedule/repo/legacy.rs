use std::collections::HashMap;

use models::schedule::{ActiveSchedule, ScheduleDescriptor};
use models::{active_schedule, DatabaseConnection, StoreError};
use tracing::debug;

use crate::active_schedule::ActiveScheduleStore;
use crate::logged;

/// Active schedules in the `activeschedule` table, keyed by app id.
#[derive(Clone)]
pub struct LegacyActiveScheduleStore {
    pub db: DatabaseConnection,
}

impl LegacyActiveScheduleStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ActiveScheduleStore for LegacyActiveScheduleStore {
    async fn insert(&self, app_id: &str, schedule: &ScheduleDescriptor) -> Result<(), StoreError> {
        debug!(app_id = %app_id, schedule_id = schedule.schedule_id, "insert active schedule");
        logged("active_schedule.insert", app_id, active_schedule::insert(&self.db, app_id, schedule).await)
    }

    async fn activate(&self, app_id: &str, schedule: &ScheduleDescriptor) -> Result<(), StoreError> {
        debug!(
            app_id = %app_id,
            schedule_id = schedule.schedule_id,
            min = schedule.instance_min_count,
            max = schedule.instance_max_count,
            initial_min = ?schedule.initial_min_override(),
            "activate schedule"
        );
        logged("active_schedule.activate", app_id, active_schedule::activate(&self.db, app_id, schedule).await)
    }

    async fn get_active(&self, app_id: &str) -> Result<ActiveSchedule, StoreError> {
        logged("active_schedule.get", app_id, active_schedule::get(&self.db, app_id).await)
    }

    async fn deactivate(&self, app_id: &str) -> Result<bool, StoreError> {
        debug!(app_id = %app_id, "deactivate schedule");
        logged("active_schedule.deactivate", app_id, active_schedule::delete(&self.db, app_id).await)
    }

    async fn list_active(&self) -> Result<HashMap<String, ActiveSchedule>, StoreError> {
        logged("active_schedule.list", "*", active_schedule::list(&self.db).await)
    }

    async fn exists(&self, app_id: &str) -> Result<bool, StoreError> {
        logged("active_schedule.exists", app_id, active_schedule::exists(&self.db, app_id).await)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        logged("active_schedule.count", "*", active_schedule::count(&self.db).await)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        logged("active_schedule.delete_all", "*", active_schedule::delete_all(&self.db).await)
    }
}
